//! Layout engine for ESP completion schematics.
//!
//! This module turns a [`CompletionConfig`] into a fully positioned
//! [`Scene`]. Layout is a pure function: it performs no I/O, never fails,
//! and returns bit-identical scenes for equal inputs.
//!
//! # Pipeline Position
//!
//! ```text
//! TOML / field edits
//!     ↓ parse
//! CompletionConfig
//!     ↓ layout (this module)
//! Scene
//!     ↓ export
//! Output
//! ```
//!
//! # Submodules
//!
//! - [`labels`] - Label anchors, connectors and label text for labeled segments
//!
//! [`CompletionConfig`]: wellbore_core::completion::CompletionConfig
//! [`Scene`]: wellbore_core::scene::Scene

mod engine;
pub mod labels;

pub use engine::layout;
