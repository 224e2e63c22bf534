//! CLI command implementations.

pub mod file;
pub mod info;
pub mod normalize;
