use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validate::ValidationReport;

/// Error kind for decode failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeErrorKind {
    /// The input text is not JSON at all.
    Syntax,
    /// The document root is not a JSON object.
    NotAnObject,
    /// A value has the wrong JSON shape (object vs array vs scalar) or is
    /// missing a key the record cannot be built without.
    TypeMismatch,
}

/// Produced by `decode` when the input cannot be mapped onto the record tree.
///
/// `path` uses dotted keys with bracketed indexes, e.g.
/// `Incident[0].Contact[1].role`. The document root is `.`.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{path}: {message}")]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub path: String,
    pub message: String,
}

impl DecodeError {
    pub(crate) fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let inner = err.into_inner();
        let message = inner.to_string();
        DecodeError {
            kind: classify_json_error(&message),
            path,
            message,
        }
    }
}

fn classify_json_error(msg: &str) -> DecodeErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("missing field")
        || lower.contains("invalid type")
        || lower.contains("invalid value")
    {
        DecodeErrorKind::TypeMismatch
    } else {
        DecodeErrorKind::Syntax
    }
}

/// Encode error. Only reachable when serde_json itself refuses a value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EncodeError {
    pub message: String,
}

/// Combined error type for the `load` entry point.
#[derive(Clone, Debug, Error)]
pub enum IodefError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("document has {} violation(s)", .0.len())]
    Invalid(ValidationReport),
}
