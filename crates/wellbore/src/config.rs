//! Configuration types for Wellbore schematic rendering.
//!
//! All types implement [`serde::Deserialize`] for loading from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Visual styling options such as background and accent color.
//!
//! # Example
//!
//! ```
//! # use wellbore::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r##"
//!     [style]
//!     background_color = "#ffffff"
//!     "##,
//! )
//! .unwrap();
//! assert!(config.style().background_color().unwrap().is_some());
//! ```

use serde::Deserialize;

use wellbore_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered schematics.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Document background [`Color`], as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Accent [`Color`] of the label boxes, as a color string.
    #[serde(default)]
    accent_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style from optional color strings.
    pub fn new(background_color: Option<String>, accent_color: Option<String>) -> Self {
        Self {
            background_color,
            accent_color,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.background_color.as_deref())
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed accent [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn accent_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.accent_color.as_deref())
            .map_err(|err| format!("Invalid accent color in config: {err}"))
    }
}

fn parse_color(value: Option<&str>) -> Result<Option<Color>, String> {
    value.map(Color::new).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_has_no_overrides() {
        let config = AppConfig::default();
        assert_eq!(config.style().background_color(), Ok(None));
        assert_eq!(config.style().accent_color(), Ok(None));
    }

    #[test]
    fn test_parse_style_section() {
        let config: AppConfig = toml::from_str(
            r##"
            [style]
            background_color = "white"
            accent_color = "#e67e22"
            "##,
        )
        .unwrap();

        assert!(config.style().background_color().unwrap().is_some());
        assert!(config.style().accent_color().unwrap().is_some());
    }

    #[test]
    fn test_invalid_accent_color() {
        let style = StyleConfig::new(None, Some("mud".to_string()));
        let err = style.accent_color().unwrap_err();
        assert!(err.starts_with("Invalid accent color in config"));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.style().background_color().unwrap().is_none());
    }
}
