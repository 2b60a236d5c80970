//! Wellbore Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Wellbore layout
//! engine and its renderers. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Completion**: The validated completion parameters and the edit
//!   transition that keeps them consistent ([`completion`] module)
//! - **Scene**: The positioned output of a layout run ([`scene`] module)
//! - **Draw**: Stroke definitions for painters ([`draw`] module)

pub mod color;
pub mod completion;
pub mod draw;
pub mod geometry;
pub mod scene;
