//! External Services
//!
//! This module contains services that interact with external systems:
//! - catalog: Reference data fetch worker

pub mod catalog;

pub use catalog::{spawn_catalog_service, CatalogRequest, CatalogResponse};
