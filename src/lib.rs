//! Utho cloud provider
//!
//! A typed client for the Utho REST API ([`api`]) and one CRUD adapter per
//! resource kind ([`resource`], [`data_source`]), exposed to a host through
//! [`provider::UthoProvider`].

pub mod api;
pub mod config;
pub mod data_source;
pub mod provider;
pub mod resource;

pub use api::{ApiError, UthoClient};
pub use config::ProviderConfig;
pub use provider::UthoProvider;
