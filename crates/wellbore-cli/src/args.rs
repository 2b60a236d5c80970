//! Command-line argument definitions for the Wellbore CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, field overrides and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Wellbore schematic tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input completion file (TOML). Uses the default completion when omitted.
    #[arg(help = "Path to the input completion file")]
    pub input: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Field override applied after the input is read, e.g. `--set packer=on`.
    /// May be repeated; later overrides win.
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["wellbore"]);
        assert_eq!(args.input, None);
        assert_eq!(args.output, "out.svg");
        assert!(args.set.is_empty());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_repeated_overrides_keep_order() {
        let args = Args::parse_from([
            "wellbore",
            "well.toml",
            "-o",
            "well.svg",
            "--set",
            "packer=on",
            "--set",
            "y_tool=on",
        ]);
        assert_eq!(args.input.as_deref(), Some("well.toml"));
        assert_eq!(args.output, "well.svg");
        assert_eq!(args.set, vec!["packer=on", "y_tool=on"]);
    }
}
