#![forbid(unsafe_code)]

//! Geometric primitives for the sash layout engine.

pub mod geometry;

pub use geometry::{Point, Rect};
