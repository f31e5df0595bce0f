//! Small standalone helpers.

pub mod color;
