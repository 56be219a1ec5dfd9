//! Provider surface
//!
//! What the host sees: metadata, configuration into a client, and the
//! registries of resources and data sources bound to that client.

use crate::api::UthoClient;
use crate::config::ProviderConfig;
use crate::data_source::{AccountDataSource, ImagesDataSource, ObjectStoragePlanDataSource};
use crate::resource::{
    AutoScalingResource, CloudInstanceResource, DataSourceRegistry, Diagnostic,
    DnsRecordResource, DomainResource, FirewallResource, LoadbalancerResource,
    ResourceRegistry, SqsResource, TargetGroupResource, VpcResource,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    pub type_name: &'static str,
    pub version: String,
}

#[derive(Debug, Clone)]
pub struct UthoProvider {
    version: String,
}

impl Default for UthoProvider {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

impl UthoProvider {
    pub const TYPE_NAME: &'static str = "utho";

    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: Self::TYPE_NAME,
            version: self.version.clone(),
        }
    }

    /// Resolve the token and base URL and build the shared client.
    pub fn configure(&self, config: &ProviderConfig) -> Result<UthoClient, Vec<Diagnostic>> {
        self.configure_with(config, |key| std::env::var(key).ok())
    }

    /// Configure from a raw provider block
    pub fn configure_value(&self, block: serde_json::Value) -> Result<UthoClient, Vec<Diagnostic>> {
        let config: ProviderConfig = serde_json::from_value(block).map_err(|e| {
            vec![Diagnostic::error(
                "Invalid provider configuration",
                format!("The provider block could not be decoded: {e}"),
            )]
        })?;
        self.configure(&config)
    }

    fn configure_with(
        &self,
        config: &ProviderConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<UthoClient, Vec<Diagnostic>> {
        tracing::info!("configuring utho client");

        let token = config.resolve_token(&env);
        if token.is_empty() {
            return Err(vec![Diagnostic::error(
                "Missing utho API Token",
                "The provider cannot create the utho API client as there is a missing or empty \
                 value for the utho API token. Set the token value in the configuration or use \
                 the UTHO_TOKEN environment variable. If either is already set, ensure the value \
                 is not empty.",
            )
            .with_attribute("token")]);
        }

        let base_url = config.resolve_base_url(&env);
        let client = UthoClient::with_base_url(&token, &base_url).map_err(|e| {
            vec![Diagnostic::error(
                "Invalid utho API base URL",
                format!("The provider cannot use {base_url:?} as the API root: {e}"),
            )
            .with_attribute("base_url")]
        })?;

        tracing::info!("configured utho client for {}", client.base_url());
        Ok(client)
    }

    pub fn resources(&self, client: &UthoClient) -> ResourceRegistry {
        let mut registry = ResourceRegistry::new();
        registry
            .register(Box::new(CloudInstanceResource::new(client.clone())))
            .register(Box::new(FirewallResource::new(client.clone())))
            .register(Box::new(LoadbalancerResource::new(client.clone())))
            .register(Box::new(TargetGroupResource::new(client.clone())))
            .register(Box::new(VpcResource::new(client.clone())))
            .register(Box::new(DomainResource::new(client.clone())))
            .register(Box::new(DnsRecordResource::new(client.clone())))
            .register(Box::new(AutoScalingResource::new(client.clone())))
            .register(Box::new(SqsResource::new(client.clone())));
        registry
    }

    pub fn data_sources(&self, client: &UthoClient) -> DataSourceRegistry {
        let mut registry = DataSourceRegistry::new();
        registry
            .register(Box::new(AccountDataSource::new(client.clone())))
            .register(Box::new(ImagesDataSource::new(client.clone())))
            .register(Box::new(ObjectStoragePlanDataSource::new(client.clone())));
        registry
    }
}
