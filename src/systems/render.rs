//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The shape batch the simulation draws into
//! - Frame upload and presentation

use std::sync::Arc;
use winit::window::Window;
use gridmarch_render::{
    batch::ShapeBatch,
    context::{ContextError, RenderContext},
    pipeline::{ScreenUniforms, ShapePipeline},
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ShapePipeline,
    batch: ShapeBatch,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = ShapePipeline::new(&context.device, context.config.format);
        pipeline.update_uniforms(
            &context.queue,
            &ScreenUniforms::new(context.config.width, context.config.height),
        );

        let batch = ShapeBatch::new().with_ellipse_segments(render_config.ellipse_segments);

        log::info!(
            "Render system ready ({}x{}, {:?})",
            context.config.width,
            context.config.height,
            context.config.format
        );

        Ok(Self {
            context,
            pipeline,
            batch,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.update_uniforms(
            &self.context.queue,
            &ScreenUniforms::new(self.context.config.width, self.context.config.height),
        );
    }

    /// Reconfigure the surface at its current size
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Canvas the simulation draws the next frame into
    pub fn batch_mut(&mut self) -> &mut ShapeBatch {
        &mut self.batch
    }

    /// Upload the current batch and present it
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        self.pipeline.upload_vertices(
            &self.context.device,
            &self.context.queue,
            self.batch.vertices(),
        );

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Shape Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, self.batch.clear_color());

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.config.width, self.context.config.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }
}
