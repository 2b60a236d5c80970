//! Error adapter for converting WellboreError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. TOML parse errors
//! carry a source span and are rendered with a snippet of the input file.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use wellbore::WellboreError;

/// Adapter for a TOML parse error of a completion file.
pub struct ParseAdapter<'a> {
    /// The wrapped parse error
    err: &'a toml::de::Error,
    /// Source text for displaying snippets
    src: &'a str,
}

impl<'a> ParseAdapter<'a> {
    /// Create a new parse error adapter.
    pub fn new(err: &'a toml::de::Error, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err.message())
    }
}

impl std::error::Error for ParseAdapter<'_> {}

impl MietteDiagnostic for ParseAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("wellbore::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "completion files are TOML; missing keys take their default values",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
        )))
    }
}

/// Adapter for [`WellboreError`] variants without source information.
///
/// This adapter handles every variant except [`WellboreError::Parse`].
pub struct ErrorAdapter<'a>(pub &'a WellboreError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            WellboreError::Io(_) => "wellbore::io",
            WellboreError::Parse { .. } => "wellbore::parse",
            WellboreError::Config(_) => "wellbore::config",
            WellboreError::Edit(_) => "wellbore::edit",
            WellboreError::Export(_) => "wellbore::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            WellboreError::Edit(_) => Some(Box::new(
                "overrides take the form field=value, e.g. --set pump_stage_count=240",
            )),
            WellboreError::Config(_) => Some(Box::new(
                "configuration is read from --config, wellbore/config.toml or the platform config directory",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a parse diagnostic or a plain error, providing a
/// uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse error with source location information.
    Diagnostic(ParseAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`WellboreError`] into a list of reportable errors.
///
/// A [`WellboreError::Parse`] becomes a diagnostic pointing into the source
/// text. Every other variant becomes a single plain [`Reportable::Error`].
pub fn to_reportables(err: &WellboreError) -> Vec<Reportable<'_>> {
    match err {
        WellboreError::Parse {
            err: parse_err,
            src,
        } => vec![Reportable::Diagnostic(ParseAdapter::new(parse_err, src))],
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use wellbore::{SchematicBuilder, completion::EditError};

    use super::*;

    fn parse_error(source: &str) -> WellboreError {
        SchematicBuilder::default()
            .parse(source)
            .expect_err("Source should not parse")
    }

    #[test]
    fn test_parse_error_becomes_diagnostic() {
        let err = parse_error("pump_stage_count = \"many\"");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert!(d.source_code().is_some());
                assert_eq!(d.code().map(|c| c.to_string()).as_deref(), Some("wellbore::parse"));
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_parse_error_label_points_into_source() {
        let source = "sensor_installed = true\nmotor_type = \"diesel\"\n";
        let err = parse_error(source);

        let reportables = to_reportables(&err);
        let labels: Vec<_> = reportables[0].labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert!(labels[0].offset() >= "sensor_installed = true\n".len());
        assert!(labels[0].offset() + labels[0].len() <= source.len());
    }

    #[test]
    fn test_edit_error_has_code_and_help() {
        let err = WellboreError::Edit(EditError::UnknownField("depth".to_string()));

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Edit error: unknown completion field `depth`");
                assert_eq!(e.code().map(|c| c.to_string()).as_deref(), Some("wellbore::edit"));
                assert!(e.help().is_some());
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_config_error_has_code_and_help() {
        let err = WellboreError::Config("Missing configuration file: absent.toml".to_string());

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(
                    e.code().map(|c| c.to_string()).as_deref(),
                    Some("wellbore::config")
                );
                assert!(e.help().unwrap().to_string().contains("--config"));
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_io_error_code() {
        let err = WellboreError::Io(std::io::Error::other("disk full"));
        let reportables = to_reportables(&err);
        assert_eq!(
            reportables[0].code().map(|c| c.to_string()).as_deref(),
            Some("wellbore::io")
        );
        assert!(reportables[0].labels().is_none());
    }
}
