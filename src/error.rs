//! Error types for reportdoc library.

use thiserror::Error;

/// Result type alias for reportdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while formatting a report.
///
/// Structural anomalies in the source text (preamble before the first
/// heading, duplicate section types, headings with no body) are absorbed
/// by the splitter and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// The input text was empty or whitespace-only.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The rendering sink failed mid-stream.
    ///
    /// Commands issued before the failure have already been delivered;
    /// the caller decides how to flag the partial output.
    #[error("Sink failure: {0}")]
    Sink(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Wrap a sink-side error.
    pub fn sink(err: impl std::fmt::Display) -> Self {
        Error::Sink(err.to_string())
    }

    /// Check if this error happened after output may have been emitted.
    pub fn is_sink_failure(&self) -> bool {
        matches!(self, Error::Sink(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("empty text".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty text");

        let err = Error::sink("broken pipe");
        assert_eq!(err.to_string(), "Sink failure: broken pipe");
        assert!(err.is_sink_failure());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Render(_)));
        assert!(!err.is_sink_failure());
    }
}
