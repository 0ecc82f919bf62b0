//! Route registration and URL building
//!
//! Provides the [`RouteBuilder`] seam the link fields call through, plus
//! the concrete [`RouteRegistry`] that resolves endpoint names to URLs.

pub mod registry;

pub use registry::{RouteBuilder, RouteRegistry};
