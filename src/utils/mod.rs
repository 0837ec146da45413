//! Utility functions.
//!
//! - [`code_generator`] - Deterministic digest-based short code generation

pub mod code_generator;
