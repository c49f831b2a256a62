//! Input point generation

pub mod synthetic;
