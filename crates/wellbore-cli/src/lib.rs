//! CLI logic for the Wellbore schematic tool.
//!
//! This module contains the core CLI logic for the Wellbore schematic tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use wellbore::{SchematicBuilder, WellboreError, completion::CompletionConfig};

/// Run the Wellbore CLI application
///
/// This function reads the completion (or starts from the default one),
/// applies the `--set` overrides in order, and writes the resulting SVG to
/// the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `WellboreError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Invalid overrides
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), WellboreError> {
    info!(
        input_path:? = args.input,
        output_path = args.output;
        "Processing completion"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = SchematicBuilder::new(app_config);

    let completion = match &args.input {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            builder.parse(&source)?
        }
        None => {
            info!("No input file given, using the default completion");
            CompletionConfig::default()
        }
    };
    let completion = builder.apply_edits(completion, &args.set)?;

    let scene = builder.layout(&completion);
    let svg = builder.render_svg(&scene, completion.zoom())?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
