//! Miette diagnostic wrapper for data file parse errors.

use miette::{Diagnostic, NamedSource, Report, SourceSpan, miette};
use thiserror::Error;

use crate::data::DataError;

/// A miette-compatible diagnostic for data file parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(varpath::data::syntax))]
pub struct DataDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl DataDiagnostic {
    /// Create a diagnostic pointing at `line`:`column` of `content`.
    pub fn new(path: &str, content: &str, line: usize, column: usize, message: String) -> Self {
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        DataDiagnostic {
            src: NamedSource::new(path, content.to_string()),
            span: (offset, 1).into(),
            message,
        }
    }

    /// Offset of the labelled error position.
    #[cfg(test)]
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}

/// Convert a load failure into a report, with source context for parse
/// errors.
pub fn report_data_error(err: DataError) -> Report {
    match err {
        DataError::Parse {
            path,
            line,
            column,
            message,
            content,
        } => DataDiagnostic::new(&path.display().to_string(), &content, line, column, message)
            .into(),
        other @ (DataError::Io { .. } | DataError::UnknownFormat { .. }) => miette!("{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::DataDiagnostic;

    #[test]
    fn offset_points_into_the_error_line() {
        let content = "{\n  \"a\": ,\n}";
        let diagnostic = DataDiagnostic::new("bad.json", content, 2, 8, "expected value".into());
        assert_eq!(diagnostic.offset(), 9);
        assert_eq!(&content[diagnostic.offset()..=diagnostic.offset()], ",");
    }

    #[test]
    fn offset_is_clamped_to_content() {
        let diagnostic = DataDiagnostic::new("bad.json", "{", 9, 9, "eof".into());
        assert_eq!(diagnostic.offset(), 1);
    }
}
