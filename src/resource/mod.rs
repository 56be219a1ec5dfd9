//! Resource adapter layer
//!
//! One adapter per managed resource kind, each translating between a
//! serde state struct and the typed API client.
//!
//! # Architecture
//!
//! - [`adapter`] - typed CRUD traits and their JSON-erased counterparts
//! - [`diagnostics`] - how failures are reported to the host
//! - [`registry`] - type-name lookup of erased adapters
//!
//! # Example
//!
//! ```ignore
//! use utho_provider::api::UthoClient;
//! use utho_provider::resource::{DynamicResource, FirewallResource};
//!
//! async fn make_firewall(client: UthoClient) -> serde_json::Value {
//!     let firewalls = FirewallResource::new(client);
//!     DynamicResource::create(&firewalls, serde_json::json!({ "name": "web" }))
//!         .await
//!         .unwrap()
//! }
//! ```

pub mod adapter;
pub mod auto_scaling;
pub mod cloud_instance;
pub mod diagnostics;
pub mod dns_record;
pub mod domain;
pub mod firewall;
pub mod load_balancer;
pub mod registry;
pub mod sqs;
pub mod target_group;
pub mod vpc;

pub use adapter::{
    AdapterError, DataSourceAdapter, DynamicDataSource, DynamicResource, ResourceAdapter, Result,
};
pub use auto_scaling::AutoScalingResource;
pub use cloud_instance::CloudInstanceResource;
pub use diagnostics::{Diagnostic, Operation, Severity};
pub use dns_record::DnsRecordResource;
pub use domain::DomainResource;
pub use firewall::FirewallResource;
pub use load_balancer::LoadbalancerResource;
pub use registry::{DataSourceRegistry, Registry, ResourceRegistry};
pub use sqs::SqsResource;
pub use target_group::TargetGroupResource;
pub use vpc::VpcResource;
