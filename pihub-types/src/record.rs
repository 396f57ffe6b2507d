//! Staged target records.
//!
//! A [`Record`] is what the platform hands over for publication: an item
//! type tag, the canonical item it came from, an optional publication
//! intent and a bag of named fields whose values are plain JSON. The
//! adapter reads fields through [`Record::require_str`], which turns a
//! missing or mistyped field into a [`FieldError`] instead of a panic.

use crate::CanonicalItemId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Whether delivering a record creates or removes something at the target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PublicationIntent {
    Create,
    Delete,
    /// Any other platform-defined intent, kept verbatim.
    Other(String),
}

impl PublicationIntent {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Create => "CREATE",
            Self::Delete => "DELETE",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for PublicationIntent {
    fn from(s: String) -> Self {
        match s.as_str() {
            "CREATE" => Self::Create,
            "DELETE" => Self::Delete,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for PublicationIntent {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<PublicationIntent> for String {
    fn from(intent: PublicationIntent) -> Self {
        match intent {
            PublicationIntent::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PublicationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to read a named field off a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("missing field `{field}`")]
    Missing { field: String },

    #[error("field `{field}` is {found}, expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// A target item staged for publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Platform item type tag (e.g. `RaspberryPiCommandTargetItem`).
    pub item_type: String,
    /// The canonical item this record was composed from.
    pub canonical_id: CanonicalItemId,
    /// Publication intent, if the item type carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<PublicationIntent>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(item_type: impl Into<String>, canonical_id: CanonicalItemId) -> Self {
        Self {
            item_type: item_type.into(),
            canonical_id,
            intent: None,
            fields: Map::new(),
        }
    }

    #[must_use]
    pub fn with_intent(mut self, intent: PublicationIntent) -> Self {
        self.intent = Some(intent);
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Raw field lookup.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Reads a field that must be present and hold a string.
    ///
    /// A JSON `null` counts as missing.
    pub fn require_str(&self, name: &str) -> Result<&str, FieldError> {
        match self.fields.get(name) {
            None | Some(Value::Null) => Err(FieldError::Missing {
                field: name.to_string(),
            }),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(FieldError::WrongType {
                field: name.to_string(),
                expected: "a string",
                found: json_type_name(other),
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
