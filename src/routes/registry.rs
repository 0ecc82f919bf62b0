//! Named route registry and URL builder
//!
//! Routes are registered once at startup and only read during serving, so
//! a shared registry is safe for concurrent serialization with no
//! coordination.

use crate::core::error::RouteError;
use crate::core::field::FieldValue;
use indexmap::IndexMap;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap())
}

/// Build a URL for a named endpoint from resolved parameters
///
/// Implementations must be safe for concurrent read-only use; fields hold
/// no registry state and call through this seam on every serialization.
pub trait RouteBuilder {
    /// Resolve `endpoint` with `params`, optionally as an externally
    /// qualified URL
    ///
    /// Fails with a [`RouteError`] when the endpoint/parameter combination
    /// does not match a registered route. The error is never recovered by
    /// the calling field; it surfaces to the caller of serialization.
    fn build_url(
        &self,
        endpoint: &str,
        params: &IndexMap<String, FieldValue>,
        external: bool,
    ) -> Result<String, RouteError>;
}

/// A registered route: path template plus its placeholder names
#[derive(Debug, Clone)]
struct RouteTemplate {
    path: String,
    placeholders: Vec<String>,
}

/// Registry mapping endpoint names to path templates
///
/// Path templates use `{name}` placeholders, e.g. `/authors/{id}`.
/// Parameters that do not appear in the path are appended as a query
/// string in specification order.
///
/// # Example
///
/// ```ignore
/// let registry = RouteRegistry::new()
///     .with_base_url("https://api.example.com")
///     .register("author", "/authors/{id}")
///     .register("authors", "/authors/");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: HashMap<String, RouteTemplate>,
    base_url: Option<String>,
}

impl RouteRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL prepended to externally qualified links
    ///
    /// A trailing slash is stripped so path templates can always start
    /// with `/`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        self.base_url = Some(base);
        self
    }

    /// Register a named route
    pub fn register(mut self, endpoint: impl Into<String>, path: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let path = path.into();
        let placeholders = placeholder_regex()
            .captures_iter(&path)
            .map(|captures| captures[1].to_string())
            .collect();

        tracing::debug!(endpoint = %endpoint, path = %path, "registered route");
        self.routes.insert(endpoint, RouteTemplate { path, placeholders });
        self
    }

    /// The configured base URL, if any
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Check whether an endpoint is registered
    pub fn has_endpoint(&self, endpoint: &str) -> bool {
        self.routes.contains_key(endpoint)
    }
}

impl RouteBuilder for RouteRegistry {
    fn build_url(
        &self,
        endpoint: &str,
        params: &IndexMap<String, FieldValue>,
        external: bool,
    ) -> Result<String, RouteError> {
        let route = self
            .routes
            .get(endpoint)
            .ok_or_else(|| RouteError::UnknownEndpoint {
                endpoint: endpoint.to_string(),
            })?;

        let mut url = route.path.clone();
        for name in &route.placeholders {
            let value = params.get(name).ok_or_else(|| RouteError::MissingParam {
                endpoint: endpoint.to_string(),
                param: name.clone(),
            })?;
            url = url.replace(&format!("{{{}}}", name), &value.to_param());
        }

        // Leftover params become the query string, in specification order
        let query: Vec<String> = params
            .iter()
            .filter(|(name, _)| !route.placeholders.contains(*name))
            .map(|(name, value)| format!("{}={}", name, value.to_param()))
            .collect();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        if external {
            let base = self
                .base_url
                .as_deref()
                .ok_or_else(|| RouteError::NoBaseUrl {
                    endpoint: endpoint.to_string(),
                })?;
            return Ok(format!("{}{}", base, url));
        }

        Ok(url)
    }
}
