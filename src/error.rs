//! Error types for chord validation and the JSON entry points.

use thiserror::Error;

/// Why a chord description was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The description (or a nested value) is not the expected JSON type.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Wrong number of statuses, or an entry outside `none`/`open`/`closed`.
    /// `index` names the offending entry when there is one.
    #[error("invalid string status: {reason}")]
    InvalidStringStatus {
        index: Option<usize>,
        reason: String,
    },

    /// The mark matches neither the clamp nor the barre shape.
    #[error("mark {index} matches no known shape")]
    UnknownMarkShape { index: usize },

    #[error("mark {index}: invalid `{field}`: {reason}")]
    InvalidFieldValue {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

/// Errors from the string-in entry points (`render_json_to_svg` and friends).
#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON syntax error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid chord: {0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;
