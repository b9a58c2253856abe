//! `MLStringType`: free text with an optional language tag.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A multilingual string.
///
/// On the wire this is either a bare JSON string or an object
/// `{"value": ..., "lang": ..., "translation-id": ...}`. Decoding accepts both.
/// Encoding emits the bare string when neither `lang` nor `translation_id` is
/// set, and the object form otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MlString {
    pub value: String,
    pub lang: Option<String>,
    pub translation_id: Option<String>,
}

impl MlString {
    pub fn new(value: impl Into<String>) -> Self {
        MlString {
            value: value.into(),
            lang: None,
            translation_id: None,
        }
    }

    pub fn with_lang(value: impl Into<String>, lang: impl Into<String>) -> Self {
        MlString {
            value: value.into(),
            lang: Some(lang.into()),
            translation_id: None,
        }
    }

    /// True when the shorthand bare-string form carries everything.
    pub fn is_bare(&self) -> bool {
        self.lang.is_none() && self.translation_id.is_none()
    }
}

impl From<&str> for MlString {
    fn from(value: &str) -> Self {
        MlString::new(value)
    }
}

impl From<String> for MlString {
    fn from(value: String) -> Self {
        MlString::new(value)
    }
}

impl Serialize for MlString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        if self.is_bare() {
            return serializer.serialize_str(&self.value);
        }
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("value", &self.value)?;
        if let Some(lang) = &self.lang {
            map.serialize_entry("lang", lang)?;
        }
        if let Some(id) = &self.translation_id {
            map.serialize_entry("translation-id", id)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MlString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::String(s) => Ok(MlString::new(s)),
            Value::Object(map) => {
                let text = match map.get("value") {
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => {
                        return Err(serde::de::Error::custom(format!(
                            "invalid type: MLString value must be a string, got {}",
                            other
                        )));
                    }
                    None => {
                        return Err(serde::de::Error::custom(
                            "missing field `value` in MLString object",
                        ));
                    }
                };
                Ok(MlString {
                    value: text,
                    lang: optional_string(&map, "lang")?,
                    translation_id: optional_string(&map, "translation-id")?,
                })
            }
            other => Err(serde::de::Error::custom(format!(
                "invalid type: MLString must be a string or object, got {}",
                other
            ))),
        }
    }
}

fn optional_string<E: serde::de::Error>(
    map: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<String>, E> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(E::custom(format!(
            "invalid type: MLString {} must be a string, got {}",
            key, other
        ))),
    }
}
