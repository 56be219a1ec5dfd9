//! Typed client for the Utho REST API
//!
//! One module per resource kind. Each adds its endpoint methods to
//! [`UthoClient`] and declares the request and reply shapes it uses.

pub mod account;
pub mod auto_scaling;
pub mod client;
pub mod cloud_instance;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod firewall;
pub mod http;
pub mod images;
pub mod load_balancer;
pub mod object_storage;
pub mod sqs;
pub mod target_group;
pub mod vpc;

pub use client::{UthoClient, BASE_URL};
pub use envelope::Envelope;
pub use error::{ApiError, Result};
