//! JSON ⇄ record tree.
//!
//! Decoding is a serde walk over a `serde_json::Value`, so unknown keys are
//! ignored and missing slots stay unset. It fails only when the input is not
//! JSON, the root is not an object, or a value has the wrong shape for its
//! slot; the error names the offending path.
//!
//! Encoding emits keys in field declaration order and never writes unset
//! slots. Encoding the same tree twice gives byte-identical text.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{DecodeError, DecodeErrorKind, EncodeError};
use crate::types::IodefDocument;

/// Text form produced by [`encode_string_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodeStyle {
    /// No whitespace. This is the canonical form for round-trip comparison.
    #[default]
    Compact,
    /// Two-space indented.
    Pretty,
}

/// Decode a whole IODEF document from a JSON value.
pub fn decode(value: &Value) -> Result<IodefDocument, DecodeError> {
    decode_record(value)
}

/// Decode a whole IODEF document from JSON text.
pub fn decode_str(input: &str) -> Result<IodefDocument, DecodeError> {
    let value: Value = serde_json::from_str(input).map_err(|e| {
        debug!(error = %e, "input is not JSON");
        DecodeError {
            kind: DecodeErrorKind::Syntax,
            path: ".".to_string(),
            message: e.to_string(),
        }
    })?;
    decode(&value)
}

/// Decode any record type from a JSON value. Every record is a JSON object.
pub fn decode_record<R: DeserializeOwned>(value: &Value) -> Result<R, DecodeError> {
    if !value.is_object() {
        return Err(DecodeError {
            kind: DecodeErrorKind::NotAnObject,
            path: ".".to_string(),
            message: format!("expected a JSON object, got {}", json_kind(value)),
        });
    }
    serde_path_to_error::deserialize(value).map_err(|e| {
        let err = DecodeError::from_path_error(e);
        debug!(path = %err.path, message = %err.message, "decode failed");
        err
    })
}

/// Encode a whole document as a JSON value.
pub fn encode(doc: &IodefDocument) -> Result<Value, EncodeError> {
    encode_record(doc)
}

/// Encode any record type as a JSON value.
pub fn encode_record<R: Serialize>(record: &R) -> Result<Value, EncodeError> {
    serde_json::to_value(record).map_err(|e| EncodeError {
        message: format!("failed to convert record to JSON value: {}", e),
    })
}

/// Encode a document as compact JSON text.
pub fn encode_string(doc: &IodefDocument) -> Result<String, EncodeError> {
    encode_string_with(doc, EncodeStyle::Compact)
}

/// Encode a document as indented JSON text.
pub fn encode_string_pretty(doc: &IodefDocument) -> Result<String, EncodeError> {
    encode_string_with(doc, EncodeStyle::Pretty)
}

/// Encode a document as JSON text in the given style.
pub fn encode_string_with(doc: &IodefDocument, style: EncodeStyle) -> Result<String, EncodeError> {
    let value = encode(doc)?;
    let text = match style {
        EncodeStyle::Compact => serde_json::to_string(&value),
        EncodeStyle::Pretty => serde_json::to_string_pretty(&value),
    };
    text.map_err(|e| EncodeError {
        message: format!("failed to write JSON text: {}", e),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
