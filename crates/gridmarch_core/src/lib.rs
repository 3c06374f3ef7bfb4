//! Core simulation for GridMarch
//!
//! This crate holds everything that has state or geometry in a marching
//! field, with no windowing or GPU dependencies:
//!
//! - [`Simulation`] - Groups, frame counter, tick/resize entry points
//! - [`Group`] / [`Figure`] - Figures sharing one color and direction
//! - [`Direction`] - Non-zero grid-aligned movement vector
//! - [`FieldParams`] - Grid size, separation, group count, cadence, density
//! - [`Canvas`] - Drawing primitives the host provides
//! - [`RandomSource`] - Uniform values the host provides at setup

pub mod canvas;
mod color;
mod figure;
mod params;
pub mod random;
pub mod simulation;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use color::{palette_color, Rgb, DEFAULT_PALETTE};
pub use figure::{Direction, Figure, Group, ShapeKind};
pub use params::FieldParams;
pub use random::{RandomSource, RngSource, SequenceSource};
pub use simulation::{SetupError, Simulation};
