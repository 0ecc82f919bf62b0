//! Core module containing fundamental traits and types for link serialization

pub mod attributes;
pub mod error;
pub mod field;
pub mod template;

pub use attributes::AttributeSource;
pub use error::{AttributeError, HyperError, Result, RouteError, ValidationError};
pub use field::{Field, FieldValue};
pub use template::{ParamValue, template_attribute};
