//! Parameter templates of the form `<attribute>`
//!
//! A route parameter in a link field is either a literal or a template
//! naming an attribute of the entity being serialized. Classification
//! happens once when the field is constructed, so the hot serialization
//! path never re-sniffs the string.

use crate::core::attributes::AttributeSource;
use crate::core::error::AttributeError;
use crate::core::field::FieldValue;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Extract the attribute name from a `<attr>` template
///
/// A value is a template iff, after trimming outer whitespace, it starts
/// with `<` and ends with `>`. Whitespace inside the brackets is ignored.
/// Returns `None` for non-template values.
pub fn template_attribute(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('<') && trimmed.ends_with('>') {
        Some(trimmed[1..trimmed.len() - 1].trim())
    } else {
        None
    }
}

/// A route parameter: a literal value or a deferred attribute lookup
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Used as-is on every serialization
    Literal(FieldValue),

    /// Resolved by attribute lookup against the current entity
    Attribute(String),
}

impl ParamValue {
    /// Resolve against the entity currently being serialized
    ///
    /// Literal parameters clone through. Attribute parameters perform a
    /// read-only lookup and fail with an [`AttributeError`] naming both the
    /// attribute and the entity when the attribute is absent.
    pub fn resolve(&self, entity: &dyn AttributeSource) -> Result<FieldValue, AttributeError> {
        match self {
            ParamValue::Literal(value) => Ok(value.clone()),
            ParamValue::Attribute(name) => {
                entity.attribute(name).ok_or_else(|| AttributeError {
                    attribute: name.clone(),
                    entity: entity.repr(),
                })
            }
        }
    }
}

impl From<FieldValue> for ParamValue {
    fn from(value: FieldValue) -> Self {
        if let FieldValue::String(s) = &value {
            if let Some(attr) = template_attribute(s) {
                return ParamValue::Attribute(attr.to_string());
            }
        }
        ParamValue::Literal(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::from(FieldValue::from(value))
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::from(FieldValue::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Literal(FieldValue::Integer(value))
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Literal(FieldValue::Integer(value as i64))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Literal(FieldValue::Float(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Literal(FieldValue::Boolean(value))
    }
}

impl From<Uuid> for ParamValue {
    fn from(value: Uuid) -> Self {
        ParamValue::Literal(FieldValue::Uuid(value))
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        ParamValue::Literal(FieldValue::DateTime(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_extraction_is_whitespace_insensitive() {
        for raw in ["<id>", " <id>", "<id> ", "< id>", "<id  >", "< id >", "<  id  >"] {
            assert_eq!(template_attribute(raw), Some("id"), "failed for {:?}", raw);
        }
    }

    #[test]
    fn test_non_templates() {
        assert_eq!(template_attribute("id"), None);
        assert_eq!(template_attribute("<id"), None);
        assert_eq!(template_attribute("id>"), None);
        assert_eq!(template_attribute("<"), None);
        assert_eq!(template_attribute(""), None);
    }

    #[test]
    fn test_classification_at_construction() {
        assert_eq!(
            ParamValue::from("<id>"),
            ParamValue::Attribute("id".to_string())
        );
        assert_eq!(
            ParamValue::from("plain"),
            ParamValue::Literal(FieldValue::String("plain".to_string()))
        );
        assert_eq!(
            ParamValue::from(7i64),
            ParamValue::Literal(FieldValue::Integer(7))
        );
    }

    #[test]
    fn test_resolve_literal() {
        let entity = json!({});
        let param = ParamValue::from(7i64);
        assert_eq!(param.resolve(&entity).unwrap(), FieldValue::Integer(7));
    }

    #[test]
    fn test_resolve_attribute() {
        let entity = json!({ "id": 123 });
        let param = ParamValue::from("<id>");
        assert_eq!(param.resolve(&entity).unwrap(), FieldValue::Integer(123));
    }

    #[test]
    fn test_resolve_falsy_attribute_is_not_missing() {
        let entity = json!({ "id": 0 });
        let param = ParamValue::from("<id>");
        assert_eq!(param.resolve(&entity).unwrap(), FieldValue::Integer(0));
    }

    #[test]
    fn test_resolve_missing_attribute() {
        let entity = json!({ "id": 123 });
        let param = ParamValue::from("<name>");
        let err = param.resolve(&entity).unwrap_err();

        assert_eq!(err.attribute, "name");
        assert!(err.entity.contains("123"));
    }
}
