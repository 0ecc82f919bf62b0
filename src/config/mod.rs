//! Configuration loading for the route table

use crate::routes::RouteRegistry;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A named route entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Endpoint name (e.g. "author")
    pub name: String,

    /// Path template with `{name}` placeholders (e.g. "/authors/{id}")
    pub path: String,
}

/// Complete configuration for the route registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Base URL for externally qualified links
    #[serde(default)]
    pub base_url: Option<String>,

    /// List of named routes
    pub routes: Vec<RouteConfig>,
}

impl RoutesConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Build a route registry from this configuration
    pub fn build_registry(&self) -> RouteRegistry {
        let mut registry = RouteRegistry::new();
        if let Some(base) = &self.base_url {
            registry = registry.with_base_url(base.as_str());
        }
        for route in &self.routes {
            registry = registry.register(route.name.as_str(), route.path.as_str());
        }
        registry
    }
}
