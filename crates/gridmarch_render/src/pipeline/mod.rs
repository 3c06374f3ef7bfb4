//! Rendering pipeline components
//!
//! This module contains the GPU types and the render pipeline that draws
//! the tessellated shape batch.

pub mod types;
pub mod shape_pipeline;

// Re-export types
pub use types::{ScreenUniforms, Vertex2D, INITIAL_VERTEX_CAPACITY, TRIANGLE_VERTEX_COUNT};

// Re-export pipelines
pub use shape_pipeline::{grown_capacity, ShapePipeline};
