//! Single-URL link field

use crate::core::attributes::AttributeSource;
use crate::core::error::Result;
use crate::core::field::Field;
use crate::core::template::ParamValue;
use crate::fields::deserialize_passthrough;
use crate::routes::RouteBuilder;
use indexmap::IndexMap;

/// A field that serializes to the URL of a named route
///
/// Parameter values may be literals or `<attr>` templates resolved against
/// the entity being serialized. Fields are constructed once at
/// schema-definition time and are immutable afterwards; [`UrlFor::url`]
/// resolves fresh on every call since parameter values depend on the
/// entity instance.
#[derive(Debug, Clone)]
pub struct UrlFor {
    endpoint: String,
    params: IndexMap<String, ParamValue>,
    external: bool,
    allow_none: bool,
}

impl UrlFor {
    /// Create a field for a named endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            params: IndexMap::new(),
            external: false,
            allow_none: false,
        }
    }

    /// Shorthand for an externally qualified URL field
    pub fn absolute(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint).external(true)
    }

    /// Add a route parameter (literal value or `<attr>` template)
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Build externally qualified URLs (base URL prepended)
    pub fn external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    /// Accept null input on deserialization
    pub fn allow_none(mut self, allow_none: bool) -> Self {
        self.allow_none = allow_none;
        self
    }

    /// The endpoint name this field is bound to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the URL for one entity
    ///
    /// Resolves each parameter (templates by attribute lookup) and hands
    /// the result to the route builder. Both attribute and route errors
    /// propagate unmodified.
    pub fn url(&self, entity: &dyn AttributeSource, routes: &dyn RouteBuilder) -> Result<String> {
        let mut resolved = IndexMap::with_capacity(self.params.len());
        for (name, value) in &self.params {
            resolved.insert(name.clone(), value.resolve(entity)?);
        }
        Ok(routes.build_url(&self.endpoint, &resolved, self.external)?)
    }
}

impl Field for UrlFor {
    fn serialize(
        &self,
        _attribute: &str,
        entity: &dyn AttributeSource,
        routes: &dyn RouteBuilder,
    ) -> Result<serde_json::Value> {
        Ok(serde_json::Value::String(self.url(entity, routes)?))
    }

    fn deserialize(&self, value: serde_json::Value) -> Result<serde_json::Value> {
        deserialize_passthrough(value, self.allow_none)
    }
}
