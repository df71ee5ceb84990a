//! Helpers shared across days

pub mod grid;
pub mod math;
pub mod text;
