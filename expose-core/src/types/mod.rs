//! Core data types shared by the overview crates.
//!
//! Currently this is the integer geometry the placement works in:
//! [`PointInt`], [`Rectangle`], and [`Padding`].

pub mod geometry;

pub use geometry::{Padding, PointInt, Rectangle};
