//! Error types for lifelab.
//!
//! All fallible operations return `Result<T, LifeError>` instead of
//! panicking; errors propagate to the caller and stop the render loop.

use thiserror::Error;

/// Result type alias for lifelab operations.
pub type LifeResult<T> = Result<T, LifeError>;

/// Unified error type for all lifelab operations.
#[derive(Debug, Error)]
pub enum LifeError {
    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== Universe Errors =====
    /// Cell coordinate outside the universe.
    #[error("Cell ({row}, {col}) is outside the {width}x{height} universe")]
    OutOfBounds {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// Universe width.
        width: u32,
        /// Universe height.
        height: u32,
    },

    /// Pattern text could not be parsed.
    #[error("Pattern parse error at line {line}: {message}")]
    PatternParse {
        /// 1-based line number in the pattern text.
        line: usize,
        /// Description of the parse failure.
        message: String,
    },

    /// Pattern does not fit in the universe at the requested offset.
    #[error("Pattern '{name}' ({width}x{height}) does not fit at ({row}, {col})")]
    PatternDoesNotFit {
        /// Pattern name.
        name: String,
        /// Pattern width.
        width: u32,
        /// Pattern height.
        height: u32,
        /// Requested top row.
        row: u32,
        /// Requested left column.
        col: u32,
    },

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LifeError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a pattern parse error.
    #[must_use]
    pub fn pattern(line: usize, message: impl Into<String>) -> Self {
        Self::PatternParse {
            line,
            message: message.into(),
        }
    }

    /// Create an I/O error with a message (wraps in `std::io::Error`).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(std::io::Error::other(message.into()))
    }

    /// Check if this error is a bounds violation.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
