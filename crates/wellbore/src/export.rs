//! Export functionality for Wellbore schematics.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a laid-out [`Scene`] into an output format. It is the final stage
//! in the Wellbore processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! CompletionConfig
//!     ↓ layout
//! Scene
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`WellboreError::Export`] at the crate
//! boundary.
//!
//! [`WellboreError::Export`]: crate::WellboreError::Export

/// SVG export backend.
pub mod svg;

use wellbore_core::scene::Scene;

/// Abstraction for schematic export backends.
///
/// Implementors convert a [`Scene`] into a specific output format.
pub trait Exporter {
    /// Exports a scene to the backend's output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scene cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_scene(&mut self, scene: &Scene) -> Result<(), Error>;
}

/// Errors that can occur during schematic export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
