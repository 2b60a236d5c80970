//! Wellbore - Schematics of electric submersible pump well completions.
//!
//! Reading, layout, and SVG rendering for ESP completion schematics. A
//! completion is described by a handful of engineering parameters (motor,
//! pump stages, fluid level, accessories) and laid out as a deterministic
//! [`Scene`](scene::Scene) of positioned segments and labels.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use wellbore_core::{color, completion, draw, geometry, scene};

pub use error::WellboreError;

use log::{debug, info, trace};

use wellbore_core::{
    completion::{CompletionConfig, FieldEdit},
    scene::Scene,
};

use config::AppConfig;
use export::Exporter;

/// Builder for reading, laying out and rendering Wellbore schematics.
///
/// # Examples
///
/// ```rust
/// use wellbore::{SchematicBuilder, config::AppConfig};
///
/// let source = r#"
/// motor_type = "pmm"
/// motor_power_hp = 500
/// packer_installed = true
/// "#;
///
/// let builder = SchematicBuilder::new(AppConfig::default());
///
/// // Read the completion description
/// let completion = builder.parse(source).expect("Failed to parse");
///
/// // Apply field edits on top of it
/// let completion = builder
///     .apply_edits(completion, ["pump_stage_count=240"])
///     .expect("Failed to apply edits");
///
/// // Lay out and render
/// let scene = builder.layout(&completion);
/// let svg = builder
///     .render_svg(&scene, completion.zoom())
///     .expect("Failed to render");
/// assert!(svg.contains("Pump 240 stages"));
/// ```
#[derive(Default)]
pub struct SchematicBuilder {
    config: AppConfig,
}

impl SchematicBuilder {
    /// Create a new schematic builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML completion description.
    ///
    /// Missing keys take their default values and numeric values are clamped
    /// to their domains. When both the packer and the y-tool are requested
    /// the packer is kept.
    ///
    /// # Errors
    ///
    /// Returns [`WellboreError::Parse`] for malformed TOML, unknown keys or
    /// values of the wrong type.
    pub fn parse(&self, source: &str) -> Result<CompletionConfig, WellboreError> {
        info!("Parsing completion");

        let completion: CompletionConfig =
            toml::from_str(source).map_err(|err| WellboreError::new_parse_error(err, source))?;

        debug!("Completion parsed successfully");
        trace!(completion:?; "Parsed completion");

        Ok(completion)
    }

    /// Apply `field=value` edits in order.
    ///
    /// Each edit goes through [`CompletionConfig::apply_edit`], so values are
    /// clamped and the packer/y-tool exclusion holds after every step.
    ///
    /// # Errors
    ///
    /// Returns [`WellboreError::Edit`] for the first edit that cannot be
    /// parsed. No edits are applied in that case.
    pub fn apply_edits<I, S>(
        &self,
        completion: CompletionConfig,
        edits: I,
    ) -> Result<CompletionConfig, WellboreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let edits = edits
            .into_iter()
            .map(|edit| edit.as_ref().parse::<FieldEdit>())
            .collect::<Result<Vec<_>, _>>()?;

        if !edits.is_empty() {
            info!(edits_count = edits.len(); "Applying completion edits");
            trace!(edits:?; "Completion edits");
        }

        Ok(completion.apply_edits(edits))
    }

    /// Lay out a completion.
    ///
    /// Layout is infallible: the completion is clamped before use.
    pub fn layout(&self, completion: &CompletionConfig) -> Scene {
        let scene = layout::layout(completion);
        info!(
            segments_count = scene.segments().len(),
            total_height = scene.total_height();
            "Layout calculated"
        );
        scene
    }

    /// Render a scene to an SVG string at the given display zoom.
    ///
    /// # Errors
    ///
    /// Returns [`WellboreError::Export`] if the configured style is invalid
    /// or the document cannot be produced.
    pub fn render_svg(&self, scene: &Scene, zoom: f32) -> Result<String, WellboreError> {
        info!(zoom; "Rendering SVG");

        let mut svg_exporter = export::svg::SvgBuilder::new(Vec::new())
            .with_style(self.config.style())
            .with_zoom(zoom)
            .build()?;

        svg_exporter.export_scene(scene)?;

        let svg_string = String::from_utf8(svg_exporter.into_inner())
            .map_err(|err| WellboreError::Export(Box::new(err)))?;

        info!("SVG rendered successfully");
        Ok(svg_string)
    }

    /// Lay out and render a completion using its own zoom.
    ///
    /// # Errors
    ///
    /// See [`SchematicBuilder::render_svg`].
    pub fn render_completion_svg(
        &self,
        completion: &CompletionConfig,
    ) -> Result<String, WellboreError> {
        let scene = self.layout(completion);
        self.render_svg(&scene, completion.zoom())
    }
}
