//! GridMarch - a marching field of colored shapes
//!
//! Library half of the `gridmarch` binary: configuration loading and the
//! window, render and simulation systems the event loop drives.

pub mod config;
pub mod systems;
