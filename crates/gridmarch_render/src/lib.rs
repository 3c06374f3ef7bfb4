//! 2D Rendering Library
//!
//! This crate provides the wgpu-based host side of the drawing surface used
//! by `gridmarch_core`.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`batch::ShapeBatch`] - A [`Canvas`] that tessellates shapes into triangles
//! - [`pipeline::ShapePipeline`] - Uploads and draws the batch

pub mod batch;
pub mod context;
pub mod pipeline;

pub use batch::ShapeBatch;
pub use context::{ContextError, RenderContext};

// Re-export the drawing capability for convenience
pub use gridmarch_core::{Canvas, Rgb};
