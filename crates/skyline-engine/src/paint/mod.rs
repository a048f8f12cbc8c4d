//! Paint model shared between scene geometry and renderers.
//!
//! Only flat colors exist: every drawable leaf carries one color for all of
//! its vertices.

pub mod color;

pub use color::Color;
