//! JSON binding and structural validator for
//! [IODEF v2 (RFC 7970)](https://www.rfc-editor.org/rfc/rfc7970) incident reports.
//!
//! IODEF describes security incidents as a deep tree of typed records:
//! incidents, contacts, events, systems, observables, indicators. This crate
//! maps that tree to and from its JSON form and checks a populated tree
//! against the RFC's structural rules:
//!
//! ```text
//! decode(json) → IodefDocument → validate(doc) → ValidationReport
//!                              → encode(doc)   → json
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! let json = r#"{"version":"2.0","lang":"en","Incident":[{"purpose":"reporting",
//!   "restriction":"private","IncidentID":{"id":"492382","name":"csirt.example.com"},
//!   "GenerationTime":"2015-07-18T09:00:00-05:00","Contact":[{"role":"creator",
//!   "type":"organization","Email":[{"EmailTo":"contact@csirt.example.com"}]}]}]}"#;
//!
//! let doc = iodef::decode_str(json).expect("well-formed JSON");
//! let report = iodef::validate(&doc);
//! assert!(report.is_valid());
//! let text = iodef::encode_string(&doc).expect("encodes");
//! assert_eq!(iodef::decode_str(&text).unwrap(), doc);
//! ```
//!
//! # Presence
//!
//! Every slot is an `Option` or a `Vec`, including slots the RFC requires, so
//! incomplete documents still decode and the validator can say what is
//! missing. An empty `Vec` is "not set" and is not encoded.

pub mod codec;
pub mod enums;
pub mod error;
pub mod ext;
pub mod lenient;
pub mod mlstring;
pub mod presence;
pub mod types;
pub mod validate;

pub use error::*;
pub use mlstring::MlString;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use codec::{
    EncodeStyle, decode, decode_record, decode_str, encode, encode_record, encode_string,
    encode_string_pretty, encode_string_with,
};
pub use validate::{ValidationReport, check, validate};

/// Convenience entry point composing decode → validate.
///
/// # Errors
///
/// [`IodefError::Decode`] if the text does not decode, or
/// [`IodefError::Invalid`] carrying every violation if validation fails.
///
/// # Example
///
/// ```rust
/// match iodef::load(r#"{"version":"2.0","lang":"en"}"#) {
///     Ok(doc) => println!("{} incident(s)", doc.incidents.len()),
///     Err(err) => eprintln!("{}", err),
/// }
/// ```
pub fn load(input: &str) -> Result<IodefDocument, IodefError> {
    let doc = codec::decode_str(input)?;
    let report = validate::validate(&doc);
    if !report.is_valid() {
        return Err(IodefError::Invalid(report));
    }
    Ok(doc)
}
