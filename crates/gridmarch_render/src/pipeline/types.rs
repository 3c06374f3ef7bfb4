//! GPU-compatible data types for the shape pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A 2D vertex in pixel space with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in canvas pixels (origin top-left)
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    /// Create a new vertex
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the shape pass
/// Layout: 16 bytes total (must match shape.wgsl ScreenUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ScreenUniforms {
    /// Canvas size in pixels
    pub resolution: [f32; 2],
    pub _padding: [f32; 2],
}

impl ScreenUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            resolution: [width as f32, height as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ScreenUniforms {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Vertex capacity the pipeline starts with
pub const INITIAL_VERTEX_CAPACITY: usize = 16_384;

/// Size of a single triangle in Vertex2D units (3 vertices)
pub const TRIANGLE_VERTEX_COUNT: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex2d_size() {
        // 2 floats position + 4 floats color = 24 bytes
        assert_eq!(size_of::<Vertex2D>(), 24);
    }

    #[test]
    fn test_screen_uniforms_size() {
        // 2 floats resolution + 2 floats padding = 16 bytes
        assert_eq!(size_of::<ScreenUniforms>(), 16);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<Vertex2D>(), 4);
        assert_eq!(std::mem::align_of::<ScreenUniforms>(), 4);
    }

    #[test]
    fn test_screen_uniforms_resolution() {
        let u = ScreenUniforms::new(800, 600);
        assert_eq!(u.resolution, [800.0, 600.0]);
    }
}
