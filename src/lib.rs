//! # Hyperfield
//!
//! Route-aware hypermedia link fields for serialized API responses.
//!
//! ## Features
//!
//! - **Template parameters**: `<attr>` values resolved against the entity being serialized
//! - **Single-URL fields**: relative or externally qualified links to named routes
//! - **Composite structures**: nested maps and lists of links with literal siblings
//! - **Typed failures**: missing attributes and unknown endpoints surface as errors, never placeholders
//! - **Two-phase binding**: declare fields first, bind the route registry at startup
//! - **Configuration-based**: define the route table via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hyperfield::prelude::*;
//!
//! let registry = RouteRegistry::new()
//!     .with_base_url("https://api.example.com")
//!     .register("author", "/authors/{id}")
//!     .register("authors", "/authors/");
//!
//! let field = Hyperlinks::new(links! {
//!     "self" => UrlFor::new("author").param("id", "<id>"),
//!     "collection" => UrlFor::new("authors"),
//! });
//!
//! let author = serde_json::json!({ "id": 7, "name": "Fred Douglass" });
//! let resolved = field.serialize("_links", &author, &registry)?;
//! // {"self": "/authors/7", "collection": "/authors/"}
//! ```

pub mod config;
pub mod core;
pub mod ext;
pub mod fields;
pub mod routes;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        attributes::AttributeSource,
        error::{AttributeError, HyperError, Result, RouteError, ValidationError},
        field::{Field, FieldValue},
        template::ParamValue,
    };

    // === Fields ===
    pub use crate::fields::{Hyperlinks, LinkTree, UrlFor};

    // === Macros ===
    pub use crate::links;

    // === Routes ===
    pub use crate::routes::{RouteBuilder, RouteRegistry};

    // === Config ===
    pub use crate::config::{RouteConfig, RoutesConfig};

    // === Extension ===
    pub use crate::ext::Hypermedia;

    // === External dependencies ===
    pub use indexmap::IndexMap;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::Value;
}
