//! Composite hyperlinks field
//!
//! Holds an arbitrarily nested structure of maps and lists whose leaves
//! are [`UrlFor`] fields or literal values. Serialization resolves every
//! URL leaf against the current entity while preserving the structure's
//! shape; literal siblings (titles, rels) pass through untouched.

use crate::core::attributes::AttributeSource;
use crate::core::error::Result;
use crate::core::field::Field;
use crate::fields::deserialize_passthrough;
use crate::fields::url_for::UrlFor;
use crate::routes::RouteBuilder;
use indexmap::IndexMap;

/// One node of a hyperlinks structure
///
/// The tree is built once at schema-definition time via the [`From`]
/// conversions or the [`links!`](crate::links) macro, then traversed
/// read-only on every serialization.
#[derive(Debug, Clone)]
pub enum LinkTree {
    /// Mapping with insertion-ordered keys
    Map(IndexMap<String, LinkTree>),

    /// Ordered sequence
    List(Vec<LinkTree>),

    /// URL leaf, resolved per entity
    Url(UrlFor),

    /// Literal leaf, passed through unchanged
    Literal(serde_json::Value),
}

impl LinkTree {
    fn resolve(
        &self,
        entity: &dyn AttributeSource,
        routes: &dyn RouteBuilder,
    ) -> Result<serde_json::Value> {
        match self {
            LinkTree::Url(field) => Ok(serde_json::Value::String(field.url(entity, routes)?)),
            LinkTree::Map(entries) => {
                let mut resolved = serde_json::Map::with_capacity(entries.len());
                for (key, node) in entries {
                    resolved.insert(key.clone(), node.resolve(entity, routes)?);
                }
                Ok(serde_json::Value::Object(resolved))
            }
            LinkTree::List(items) => {
                let mut resolved = Vec::with_capacity(items.len());
                for node in items {
                    resolved.push(node.resolve(entity, routes)?);
                }
                Ok(serde_json::Value::Array(resolved))
            }
            LinkTree::Literal(value) => Ok(value.clone()),
        }
    }
}

impl From<UrlFor> for LinkTree {
    fn from(field: UrlFor) -> Self {
        LinkTree::Url(field)
    }
}

impl From<&str> for LinkTree {
    fn from(value: &str) -> Self {
        LinkTree::Literal(serde_json::Value::String(value.to_string()))
    }
}

impl From<String> for LinkTree {
    fn from(value: String) -> Self {
        LinkTree::Literal(serde_json::Value::String(value))
    }
}

impl From<serde_json::Value> for LinkTree {
    fn from(value: serde_json::Value) -> Self {
        LinkTree::Literal(value)
    }
}

impl From<Vec<LinkTree>> for LinkTree {
    fn from(items: Vec<LinkTree>) -> Self {
        LinkTree::List(items)
    }
}

impl From<IndexMap<String, LinkTree>> for LinkTree {
    fn from(entries: IndexMap<String, LinkTree>) -> Self {
        LinkTree::Map(entries)
    }
}

/// A field serializing a nested structure of resolved links
///
/// # Example
///
/// ```ignore
/// let field = Hyperlinks::new(links! {
///     "self" => UrlFor::new("author").param("id", "<id>"),
///     "collection" => UrlFor::new("authors"),
/// });
/// ```
#[derive(Debug, Clone)]
pub struct Hyperlinks {
    tree: LinkTree,
    allow_none: bool,
}

impl Hyperlinks {
    /// Create a field from a hyperlinks structure
    pub fn new(tree: impl Into<LinkTree>) -> Self {
        Self {
            tree: tree.into(),
            allow_none: false,
        }
    }

    /// Accept null input on deserialization
    pub fn allow_none(mut self, allow_none: bool) -> Self {
        self.allow_none = allow_none;
        self
    }

    /// Resolve the whole structure for one entity
    ///
    /// Any attribute or route error from a nested leaf propagates
    /// unmodified; no partial structure is returned.
    pub fn resolve(
        &self,
        entity: &dyn AttributeSource,
        routes: &dyn RouteBuilder,
    ) -> Result<serde_json::Value> {
        self.tree.resolve(entity, routes)
    }
}

impl Field for Hyperlinks {
    fn serialize(
        &self,
        _attribute: &str,
        entity: &dyn AttributeSource,
        routes: &dyn RouteBuilder,
    ) -> Result<serde_json::Value> {
        self.resolve(entity, routes)
    }

    fn deserialize(&self, value: serde_json::Value) -> Result<serde_json::Value> {
        deserialize_passthrough(value, self.allow_none)
    }
}
