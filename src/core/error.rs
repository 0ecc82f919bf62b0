//! Typed error handling for the hyperfield crate
//!
//! Link resolution failures are schema-definition bugs (a template naming
//! a nonexistent attribute, a field bound to an unregistered endpoint),
//! not recoverable data conditions. Every failure surfaces as a typed
//! error; a failed link never silently becomes an empty string or a
//! placeholder value.
//!
//! # Error Categories
//!
//! - [`AttributeError`]: a `<attr>` template referenced an attribute the
//!   entity does not have
//! - [`RouteError`]: the route builder could not resolve an
//!   endpoint/parameter combination
//! - [`ValidationError`]: invalid input on deserialization

use std::fmt;

/// The main error type for the hyperfield crate
#[derive(Debug)]
pub enum HyperError {
    /// Attribute lookup failures during template resolution
    Attribute(AttributeError),

    /// Route building failures
    Route(RouteError),

    /// Input validation failures (deserialization)
    Validation(ValidationError),

    /// Internal errors (unbound extension, document conversion failures)
    Internal(String),
}

impl fmt::Display for HyperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HyperError::Attribute(e) => write!(f, "{}", e),
            HyperError::Route(e) => write!(f, "{}", e),
            HyperError::Validation(e) => write!(f, "{}", e),
            HyperError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for HyperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HyperError::Attribute(e) => Some(e),
            HyperError::Route(e) => Some(e),
            HyperError::Validation(e) => Some(e),
            HyperError::Internal(_) => None,
        }
    }
}

impl From<AttributeError> for HyperError {
    fn from(e: AttributeError) -> Self {
        HyperError::Attribute(e)
    }
}

impl From<RouteError> for HyperError {
    fn from(e: RouteError) -> Self {
        HyperError::Route(e)
    }
}

impl From<ValidationError> for HyperError {
    fn from(e: ValidationError) -> Self {
        HyperError::Validation(e)
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HyperError>;

/// A `<attr>` template named an attribute the entity does not have
///
/// Carries both the attribute name and the entity's representation so the
/// schema bug is identifiable from the message alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeError {
    /// The attribute name taken from the template
    pub attribute: String,

    /// Representation of the entity that was being serialized
    pub entity: String,
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a valid attribute of {}",
            self.attribute, self.entity
        )
    }
}

impl std::error::Error for AttributeError {}

/// The route builder could not produce a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No route is registered under the endpoint name
    UnknownEndpoint { endpoint: String },

    /// A path placeholder has no matching parameter
    MissingParam { endpoint: String, param: String },

    /// An externally qualified URL was requested but no base URL is configured
    NoBaseUrl { endpoint: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnknownEndpoint { endpoint } => {
                write!(f, "No route registered for endpoint '{}'", endpoint)
            }
            RouteError::MissingParam { endpoint, param } => {
                write!(f, "Route '{}' requires parameter '{}'", endpoint, param)
            }
            RouteError::NoBaseUrl { endpoint } => {
                write!(
                    f,
                    "Cannot build external URL for '{}': no base URL configured",
                    endpoint
                )
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Invalid input supplied to a field's deserialize operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Human-readable description of what was rejected
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error: {}", self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_error_message() {
        let err = AttributeError {
            attribute: "not-an-attr".to_string(),
            entity: "Author { id: 123 }".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("not-an-attr"));
        assert!(msg.contains("Author { id: 123 }"));
    }

    #[test]
    fn test_route_error_messages() {
        let err = RouteError::UnknownEndpoint {
            endpoint: "badendpoint".to_string(),
        };
        assert!(err.to_string().contains("badendpoint"));

        let err = RouteError::MissingParam {
            endpoint: "author".to_string(),
            param: "id".to_string(),
        };
        assert!(err.to_string().contains("author"));
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn test_error_conversions() {
        let err: HyperError = RouteError::UnknownEndpoint {
            endpoint: "x".to_string(),
        }
        .into();
        assert!(matches!(err, HyperError::Route(_)));

        let err: HyperError = ValidationError::new("null not allowed").into();
        assert!(matches!(err, HyperError::Validation(_)));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let err: HyperError = AttributeError {
            attribute: "id".to_string(),
            entity: "{}".to_string(),
        }
        .into();
        assert!(err.source().is_some());

        let err = HyperError::Internal("oops".to_string());
        assert!(err.source().is_none());
    }
}
