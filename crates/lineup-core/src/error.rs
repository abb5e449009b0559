//! Error types for the lineup pipeline
//!
//! All fallible operations return `Result<T, Error>`.
//! Malformed listing lines are never errors; parsers skip them.

use std::path::PathBuf;

use thiserror::Error;

/// Lineup error types
#[derive(Debug, Error)]
pub enum Error {
    /// Command-line argument with the wrong shape (e.g. missing `=`)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Territory code outside the supported set
    #[error("Unknown territory: {0}")]
    UnknownTerritory(String),

    /// Input file whose extension has no parser
    #[error("Unsupported file type: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    /// Output path whose extension has no table writer
    #[error("Unsupported output format: {} (expected .csv, .tsv or .xlsx)", .0.display())]
    UnsupportedOutputFormat(PathBuf),

    /// Optional capability not compiled into this build
    #[error("{capability} is not available: {remedy}")]
    MissingCapability {
        capability: &'static str,
        remedy: &'static str,
    },

    /// Reading an input or creating the output failed
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Text extraction from a binary document failed
    #[error("Document extraction failed for {}: {message}", .path.display())]
    Document { path: PathBuf, message: String },

    /// Serializing the output table failed
    #[error("Table write error: {0}")]
    Write(#[from] csv::Error),

    /// Building or saving the Excel workbook failed
    #[error("Workbook write error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

impl Error {
    /// True for errors caused by how the program was invoked.
    ///
    /// These are detected before any input is read, so nothing has been
    /// written when one is returned.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument(_)
                | Error::UnknownTerritory(_)
                | Error::UnsupportedOutputFormat(_)
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for lineup operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_classification() {
        assert!(Error::InvalidArgument("AL".into()).is_usage());
        assert!(Error::UnknownTerritory("XX".into()).is_usage());
        assert!(Error::UnsupportedOutputFormat("out.ods".into()).is_usage());
        assert!(!Error::UnsupportedFileType("al.pdf".into()).is_usage());
        assert!(!Error::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone")
        )
        .is_usage());
    }

    #[test]
    fn test_messages_name_the_input() {
        let err = Error::UnsupportedFileType("inputs/albania.pdf".into());
        assert_eq!(err.to_string(), "Unsupported file type: inputs/albania.pdf");

        let err = Error::UnknownTerritory("FR".into());
        assert_eq!(err.to_string(), "Unknown territory: FR");
    }
}
