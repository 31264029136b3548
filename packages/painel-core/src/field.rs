//! Three-state fields for partial update payloads.

use serde::{Serialize, Serializer};

/// One field of a partial update.
///
/// `Keep` is omitted from the payload (column untouched), `Clear`
/// serializes as JSON `null` (column cleared), `Set` carries a new value.
/// Blank user input maps to `Clear`; the service never stores an empty
/// string where "not provided" is meant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T> Field<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Field::Keep)
    }
}

impl Field<String> {
    /// Map raw form input: blank clears the column, anything else sets the
    /// trimmed value.
    pub fn from_input(input: impl Into<String>) -> Self {
        let input = input.into();
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Field::Clear
        } else {
            Field::Set(trimmed.to_string())
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Keep only reaches here if a payload forgot its
            // `skip_serializing_if`; null is the harmless fallback.
            Field::Keep | Field::Clear => serializer.serialize_none(),
            Field::Set(value) => value.serialize(serializer),
        }
    }
}
