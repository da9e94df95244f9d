//! Error handling for the scatter chart
//!
//! This module defines the crate error type and a Result alias used by the
//! loader, the normalisation step and the configuration layer.

use thiserror::Error;

/// Main error type for chart operations
#[derive(Error, Debug)]
pub enum ChartError {
    /// The dataset could not be retrieved from its source
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The dataset body was not the expected JSON shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A race time was not in `MM:SS` form
    #[error("Invalid race time {input:?}: expected MM:SS")]
    InvalidTime { input: String },

    /// Two records share the same place, so markers cannot be keyed
    #[error("Duplicate place {0} in dataset")]
    DuplicateRank(u32),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ChartError>,
    },
}

impl ChartError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ChartError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a fetch error from an HTTP client error
    pub fn from_http_error(err: ureq::Error) -> Self {
        ChartError::Fetch(err.to_string())
    }
}

/// Result type alias for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ureq::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ChartError::from_http_error(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ChartError::from_http_error(e).with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChartError::InvalidTime {
            input: "3650".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid race time \"3650\": expected MM:SS");
    }

    #[test]
    fn test_error_with_context() {
        let err = ChartError::DuplicateRank(4);
        let with_ctx = err.with_context("Failed to normalize dataset");
        assert!(with_ctx.to_string().contains("Failed to normalize dataset"));
        assert!(with_ctx.to_string().contains("Duplicate place 4"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: ChartError = serde_json::from_str::<Vec<u32>>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ChartError::Json(_)));
    }

    #[test]
    fn test_result_ext_context() {
        let res: Result<()> = Err(ChartError::Fetch("timed out".to_string()));
        let err = res.context("Loading cyclist data").unwrap_err();
        assert_eq!(err.to_string(), "Loading cyclist data: Fetch error: timed out");
    }
}
