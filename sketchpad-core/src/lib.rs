//! # Sketchpad Core
//!
//! A fixed-size character canvas. Shapes are rasterized onto a grid of
//! cells addressed from `(1, 1)` at the top-left to `(width, height)` at the
//! bottom-right, and the grid serializes to a bordered block of text.
//!
//! Only axis-aligned lines and outline rectangles are supported. Every
//! operation validates all of its arguments before marking a single cell.

pub mod canvas;
pub mod error;
pub mod geometry;

// Re-export the main types so users can just use `sketchpad_core::Canvas`
pub use canvas::{Canvas, Cell, MAX_CELLS};
pub use error::{InvalidArgument, Result};
pub use geometry::{Axis, Point, Rect, Segment};
