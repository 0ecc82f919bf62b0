//! The link field family: single-URL fields and composite hyperlink structures

pub mod hyperlinks;
mod macros;
pub mod url_for;

pub use hyperlinks::{Hyperlinks, LinkTree};
pub use url_for::UrlFor;

use crate::core::error::{Result, ValidationError};

/// Identity deserialization shared by the link field family
///
/// Link fields are write-only: any input passes through unchanged. Null is
/// only accepted when the field allows it.
pub(crate) fn deserialize_passthrough(
    value: serde_json::Value,
    allow_none: bool,
) -> Result<serde_json::Value> {
    if value.is_null() && !allow_none {
        return Err(ValidationError::new("field does not accept null").into());
    }
    Ok(value)
}
