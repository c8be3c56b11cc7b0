//! Concrete format implementations

pub mod json;
pub mod text;
