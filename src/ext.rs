//! Two-phase binding of link fields to a running application
//!
//! Fields are declared at schema-definition time with no knowledge of the
//! route table. [`Hypermedia`] is the explicit second phase: construct it
//! early, bind the shared route registry once the application has built
//! it, then drive serialization through [`Hypermedia::render`].

use crate::core::error::{HyperError, Result};
use crate::core::field::Field;
use crate::routes::RouteRegistry;
use serde::Serialize;
use std::sync::{Arc, OnceLock};

/// Entry point tying declared fields to a bound route registry
pub struct Hypermedia {
    registry: OnceLock<Arc<RouteRegistry>>,
}

impl Hypermedia {
    /// Create an unbound extension
    pub fn new() -> Self {
        Self {
            registry: OnceLock::new(),
        }
    }

    /// Create an extension already bound to a registry
    pub fn with_registry(registry: Arc<RouteRegistry>) -> Self {
        let ext = Self::new();
        let _ = ext.registry.set(registry);
        ext
    }

    /// Bind the route registry
    ///
    /// Binding happens exactly once; a second call is a startup bug.
    pub fn bind(&self, registry: Arc<RouteRegistry>) -> Result<()> {
        self.registry
            .set(registry)
            .map_err(|_| HyperError::Internal("route registry already bound".to_string()))?;
        tracing::debug!("route registry bound");
        Ok(())
    }

    /// The bound registry, or an error when binding has not happened yet
    pub fn registry(&self) -> Result<&Arc<RouteRegistry>> {
        self.registry
            .get()
            .ok_or_else(|| HyperError::Internal("route registry not bound".to_string()))
    }

    /// Serialize one field for one entity
    ///
    /// The entity is converted to its JSON document form for attribute
    /// lookup; the entity itself is never mutated.
    pub fn render<T: Serialize>(
        &self,
        field: &dyn Field,
        attribute: &str,
        entity: &T,
    ) -> Result<serde_json::Value> {
        let registry = self.registry()?;
        let document = serde_json::to_value(entity)
            .map_err(|e| HyperError::Internal(format!("entity is not serializable: {}", e)))?;
        field.serialize(attribute, &document, registry.as_ref())
    }
}

impl Default for Hypermedia {
    fn default() -> Self {
        Self::new()
    }
}
