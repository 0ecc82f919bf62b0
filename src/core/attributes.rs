//! Read-only attribute access over arbitrary entity documents

use crate::core::field::FieldValue;
use std::fmt;

/// Read a named attribute off an entity being serialized
///
/// Lookup distinguishes "attribute absent" (`None`) from "attribute present
/// but null/zero/empty" (`Some` with a falsy value). A falsy-but-present
/// value is a valid resolved value and must never be treated as missing.
///
/// Any `T: Serialize` participates by converting to a `serde_json::Value`
/// document first (see [`Hypermedia::render`](crate::ext::Hypermedia::render)).
pub trait AttributeSource: fmt::Debug {
    /// Look up a named attribute, `None` when the entity has no such attribute
    fn attribute(&self, name: &str) -> Option<FieldValue>;

    /// Representation used in attribute lookup error messages
    fn repr(&self) -> String {
        format!("{:?}", self)
    }
}

impl AttributeSource for serde_json::Value {
    fn attribute(&self, name: &str) -> Option<FieldValue> {
        self.as_object()?.get(name).map(FieldValue::from_json)
    }
}

impl AttributeSource for serde_json::Map<String, serde_json::Value> {
    fn attribute(&self, name: &str) -> Option<FieldValue> {
        self.get(name).map(FieldValue::from_json)
    }
}
