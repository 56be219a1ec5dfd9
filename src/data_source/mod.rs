//! Read-only data sources
//!
//! Each lookup requires HTTP 200 and hands the decoded reply back as its
//! state.

mod account;
mod images;
mod object_storage_plan;

pub use account::AccountDataSource;
pub use images::ImagesDataSource;
pub use object_storage_plan::ObjectStoragePlanDataSource;
