//! Error types for Wellbore operations.
//!
//! This module provides the main error type [`WellboreError`] which wraps
//! the error conditions that can occur while reading a completion and
//! exporting its schematic. Layout itself never fails.

use std::io;

use thiserror::Error;

use wellbore_core::completion::EditError;

/// The main error type for Wellbore operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the TOML error so that
/// callers can point at the offending span.
#[derive(Debug, Error)]
pub enum WellboreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: toml::de::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for WellboreError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl WellboreError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
