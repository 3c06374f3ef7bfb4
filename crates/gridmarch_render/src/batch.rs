//! CPU tessellation of drawing calls
//!
//! [`ShapeBatch`] implements the core [`Canvas`] trait by turning every shape
//! call into triangles in the current fill color. The batch is rebuilt every
//! frame and handed to [`crate::pipeline::ShapePipeline`] for upload.

use gridmarch_core::{Canvas, Rgb};

use crate::pipeline::{Vertex2D, TRIANGLE_VERTEX_COUNT};

/// Default number of triangles used to approximate an ellipse
pub const DEFAULT_ELLIPSE_SEGMENTS: u32 = 24;

/// Fewest segments an ellipse can use
pub const MIN_ELLIPSE_SEGMENTS: u32 = 3;

/// Triangle list for one frame
#[derive(Clone, Debug)]
pub struct ShapeBatch {
    vertices: Vec<Vertex2D>,
    fill: [f32; 4],
    background: Rgb,
    ellipse_segments: u32,
    shapes: usize,
}

impl Default for ShapeBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeBatch {
    /// Create an empty batch with default tessellation
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            fill: Rgb::WHITE.to_rgba_f32(),
            background: Rgb::BLACK,
            ellipse_segments: DEFAULT_ELLIPSE_SEGMENTS,
            shapes: 0,
        }
    }

    /// Set how many triangles approximate an ellipse (at least 3)
    pub fn with_ellipse_segments(mut self, segments: u32) -> Self {
        self.ellipse_segments = segments.max(MIN_ELLIPSE_SEGMENTS);
        self
    }

    /// Drop this frame's geometry, keeping allocated capacity
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.shapes = 0;
    }

    /// Vertices in draw order
    pub fn vertices(&self) -> &[Vertex2D] {
        &self.vertices
    }

    /// Number of triangles in the batch
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / TRIANGLE_VERTEX_COUNT
    }

    /// Number of shape calls since the last clear
    pub fn shape_count(&self) -> usize {
        self.shapes
    }

    /// Last background color requested
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Background as a wgpu clear color
    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.background.to_rgba_f32();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }

    pub fn ellipse_segments(&self) -> u32 {
        self.ellipse_segments
    }

    #[inline]
    fn push_triangle(&mut self, a: [f32; 2], b: [f32; 2], c: [f32; 2]) {
        let color = self.fill;
        self.vertices.push(Vertex2D::new(a, color));
        self.vertices.push(Vertex2D::new(b, color));
        self.vertices.push(Vertex2D::new(c, color));
    }
}

impl Canvas for ShapeBatch {
    fn clear_background(&mut self, color: Rgb) {
        // The render pass clears the surface; anything batched so far is hidden
        self.clear();
        self.background = color;
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.fill = color.to_rgba_f32();
    }

    fn draw_ellipse(&mut self, cx: f32, cy: f32, w: f32, h: f32) {
        let rx = w / 2.0;
        let ry = h / 2.0;
        let segments = self.ellipse_segments;
        let point = |i: u32| {
            let theta = std::f32::consts::TAU * i as f32 / segments as f32;
            [cx + rx * theta.cos(), cy + ry * theta.sin()]
        };

        for i in 0..segments {
            self.push_triangle([cx, cy], point(i), point(i + 1));
        }
        self.shapes += 1;
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (x2, y2) = (x + w, y + h);
        self.push_triangle([x, y], [x2, y], [x2, y2]);
        self.push_triangle([x, y], [x2, y2], [x, y2]);
        self.shapes += 1;
    }

    fn draw_triangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.push_triangle([x1, y1], [x2, y2], [x3, y3]);
        self.shapes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_two_triangles() {
        let mut batch = ShapeBatch::new();
        batch.set_fill_color(Rgb::new(255, 0, 0));
        batch.draw_rect(10.0, 20.0, 5.0, 5.0);

        assert_eq!(batch.triangle_count(), 2);
        assert_eq!(batch.vertices()[0].position, [10.0, 20.0]);
        assert_eq!(batch.vertices()[2].position, [15.0, 25.0]);
        assert!(batch.vertices().iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_triangle_keeps_vertices() {
        let mut batch = ShapeBatch::new();
        batch.draw_triangle(0.0, 10.0, 5.0, 0.0, 10.0, 10.0);

        let positions: Vec<[f32; 2]> = batch.vertices().iter().map(|v| v.position).collect();
        assert_eq!(positions, vec![[0.0, 10.0], [5.0, 0.0], [10.0, 10.0]]);
    }

    #[test]
    fn test_ellipse_fan() {
        let mut batch = ShapeBatch::new().with_ellipse_segments(8);
        batch.draw_ellipse(50.0, 50.0, 20.0, 10.0);

        assert_eq!(batch.triangle_count(), 8);
        // Every triangle starts at the centre
        for tri in batch.vertices().chunks(3) {
            assert_eq!(tri[0].position, [50.0, 50.0]);
        }
        // Rim points stay on the ellipse bounds
        for v in batch.vertices() {
            assert!((v.position[0] - 50.0).abs() <= 10.0 + 1e-4);
            assert!((v.position[1] - 50.0).abs() <= 5.0 + 1e-4);
        }
    }

    #[test]
    fn test_ellipse_segments_minimum() {
        let batch = ShapeBatch::new().with_ellipse_segments(1);
        assert_eq!(batch.ellipse_segments(), MIN_ELLIPSE_SEGMENTS);
    }

    #[test]
    fn test_clear_background_resets_frame() {
        let mut batch = ShapeBatch::new();
        batch.draw_rect(0.0, 0.0, 1.0, 1.0);
        batch.clear_background(Rgb::new(0, 0, 255));

        assert!(batch.vertices().is_empty());
        assert_eq!(batch.shape_count(), 0);
        assert_eq!(batch.background(), Rgb::new(0, 0, 255));
        assert_eq!(batch.clear_color().b, 1.0);
    }

    #[test]
    fn test_fill_color_applies_to_later_shapes() {
        let mut batch = ShapeBatch::new();
        batch.set_fill_color(Rgb::new(255, 0, 0));
        batch.draw_triangle(0.0, 0.0, 1.0, 0.0, 0.0, 1.0);
        batch.set_fill_color(Rgb::new(0, 255, 0));
        batch.draw_triangle(0.0, 0.0, 1.0, 0.0, 0.0, 1.0);

        assert_eq!(batch.vertices()[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(batch.vertices()[3].color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(batch.shape_count(), 2);
    }
}
