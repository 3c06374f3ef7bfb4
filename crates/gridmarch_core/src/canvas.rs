//! Drawing capability consumed by the simulation
//!
//! The simulation never talks to a GPU directly. It issues calls on a
//! [`Canvas`], which the host implements (see `gridmarch_render::ShapeBatch`).
//! [`RecordingCanvas`] keeps the calls as data for tests and statistics.

use crate::color::Rgb;

/// Drawing primitives supplied by the host
///
/// Coordinates are canvas pixels with the origin at the top-left corner.
pub trait Canvas {
    /// Fill the whole canvas with a color
    fn clear_background(&mut self, color: Rgb);

    /// Set the color used by subsequent shape calls
    fn set_fill_color(&mut self, color: Rgb);

    /// Ellipse centered at `(cx, cy)` with width `w` and height `h`
    fn draw_ellipse(&mut self, cx: f32, cy: f32, w: f32, h: f32);

    /// Axis-aligned rectangle with top-left corner `(x, y)`
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Filled triangle
    fn draw_triangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32);
}

/// A single recorded drawing call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    ClearBackground(Rgb),
    SetFillColor(Rgb),
    Ellipse { cx: f32, cy: f32, w: f32, h: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Triangle { points: [[f32; 2]; 3] },
}

impl DrawCommand {
    /// Whether this command draws a shape
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            DrawCommand::Ellipse { .. } | DrawCommand::Rect { .. } | DrawCommand::Triangle { .. }
        )
    }
}

/// Canvas that records every call
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of shape commands recorded
    pub fn shape_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_shape()).count()
    }

    /// Number of fill color changes recorded
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::SetFillColor(_)))
            .count()
    }

    /// Forget all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn clear_background(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::ClearBackground(color));
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn draw_ellipse(&mut self, cx: f32, cy: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Ellipse { cx, cy, w, h });
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Rect { x, y, w, h });
    }

    fn draw_triangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.commands.push(DrawCommand::Triangle {
            points: [[x1, y1], [x2, y2], [x3, y3]],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_counts() {
        let mut canvas = RecordingCanvas::new();
        canvas.clear_background(Rgb::BLACK);
        canvas.set_fill_color(Rgb::WHITE);
        canvas.draw_rect(0.0, 0.0, 1.0, 1.0);
        canvas.draw_ellipse(0.0, 0.0, 1.0, 1.0);
        canvas.draw_triangle(0.0, 0.0, 1.0, 0.0, 0.0, 1.0);

        assert_eq!(canvas.commands().len(), 5);
        assert_eq!(canvas.shape_count(), 3);
        assert_eq!(canvas.fill_count(), 1);

        canvas.clear();
        assert!(canvas.commands().is_empty());
    }
}
