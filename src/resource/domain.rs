//! `utho_domain`

use super::adapter::{ResourceAdapter, Result};
use crate::api::domain::{Domain, DomainRequest};
use crate::api::UthoClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A DNS zone, identified by its name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainState {
    pub domain: String,
    pub nspoint: String,
    pub created_at: String,
    pub dnsrecord_count: String,
}

impl DomainState {
    fn observed(domain: Domain, fallback: String) -> Self {
        Self {
            domain: if domain.domain.is_empty() {
                fallback
            } else {
                domain.domain
            },
            nspoint: domain.nspoint,
            created_at: domain.created_at,
            dnsrecord_count: domain.dnsrecord_count,
        }
    }
}

pub struct DomainResource {
    client: UthoClient,
}

impl DomainResource {
    pub fn new(client: UthoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceAdapter for DomainResource {
    const TYPE_NAME: &'static str = "utho_domain";
    const KIND: &'static str = "domain";
    type State = DomainState;
    type Created = Domain;

    async fn submit(&self, plan: &DomainState) -> Result<Domain> {
        let request = DomainRequest {
            domain: plan.domain.clone(),
        };
        Ok(self.client.create_domain(&request).await?)
    }

    async fn settle(&self, plan: DomainState, created: Domain) -> Result<DomainState> {
        Ok(DomainState::observed(created, plan.domain))
    }

    async fn read(&self, prior: DomainState) -> Result<DomainState> {
        let domain = self.client.get_domain(&prior.domain).await?;
        Ok(DomainState::observed(domain, prior.domain))
    }

    async fn delete(&self, state: &DomainState) -> Result<()> {
        Ok(self.client.delete_domain(&state.domain).await?)
    }

    fn import_state(&self, id: &str) -> Result<DomainState> {
        Ok(DomainState {
            domain: id.to_string(),
            ..DomainState::default()
        })
    }
}
