//! Document-root resource resolution and body compression.

pub mod compress;
pub mod resolver;
