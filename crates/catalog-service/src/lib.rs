//! # Catalog Service Library
//!
//! The media catalogue built on `catalog-framework`: twelve resources, each with its
//! own actor, validator and search filter, behind a validating facade.
//!
//! - [`model`]: entities, change requests and filters
//! - [`resources`]: validators and the `CatalogEntity` implementations
//! - [`facade`]: [`CatalogClient`](facade::CatalogClient), the entry point per resource
//! - [`boundary`]: the error body returned to clients
//! - [`config`]: `catalog.toml`
//! - [`lifecycle`]: [`CatalogSystem`](lifecycle::CatalogSystem), which starts and stops everything

pub mod boundary;
pub mod config;
pub mod error;
pub mod facade;
pub mod lifecycle;
pub mod model;
pub mod resources;

pub use boundary::{ErrorResponse, Issue};
pub use config::{CatalogConfig, ConfigError};
pub use error::CatalogError;
pub use facade::CatalogClient;
pub use lifecycle::CatalogSystem;
pub use resources::Resource;
