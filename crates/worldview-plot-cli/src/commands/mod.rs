//! CLI command implementations.

pub mod calibrate;
pub mod render;
pub mod report;
