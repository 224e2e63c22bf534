//! # vinorm-core
//!
//! Core types, traits, and error definitions for the Vietnamese text normalizer.
//!
//! This crate provides the foundational abstractions shared by the engine and
//! the command-line wrapper:
//!
//! - Common data types (`Category`, `MaskKind`, `PunctClass`, `NormText`)
//! - The `TextNormalizer` trait and its `NormalizeOptions`
//! - Unified error handling via `NormError`
//! - Configuration structures

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{LoggingConfig, NormalizerConfig, ResourceConfig};
pub use error::{NormError, NormResult};
pub use traits::{NormalizeOptions, TextNormalizer};
pub use types::{Category, MaskKind, MaskedSpan, NormText, PunctClass};
