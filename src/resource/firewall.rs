//! `utho_firewall`

use super::adapter::{ResourceAdapter, Result};
use crate::api::firewall::{Firewall, FirewallCreated, FirewallRequest};
use crate::api::UthoClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallState {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub rulecount: String,
    pub serverscount: String,
}

impl From<Firewall> for FirewallState {
    fn from(fw: Firewall) -> Self {
        Self {
            id: fw.id,
            name: fw.name,
            created_at: fw.created_at,
            rulecount: fw.rulecount,
            serverscount: fw.serverscount,
        }
    }
}

pub struct FirewallResource {
    client: UthoClient,
}

impl FirewallResource {
    pub fn new(client: UthoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceAdapter for FirewallResource {
    const TYPE_NAME: &'static str = "utho_firewall";
    const KIND: &'static str = "firewall";
    type State = FirewallState;
    type Created = FirewallCreated;

    async fn submit(&self, plan: &FirewallState) -> Result<FirewallCreated> {
        tracing::debug!("create firewall {}", plan.name);
        let request = FirewallRequest {
            name: plan.name.clone(),
        };
        Ok(self.client.create_firewall(&request).await?)
    }

    /// The create reply carries only the id; the rest stays as planned.
    async fn settle(&self, plan: FirewallState, created: FirewallCreated) -> Result<FirewallState> {
        Ok(FirewallState {
            id: created.id,
            ..plan
        })
    }

    async fn read(&self, prior: FirewallState) -> Result<FirewallState> {
        Ok(self.client.get_firewall(&prior.id).await?.into())
    }

    async fn delete(&self, state: &FirewallState) -> Result<()> {
        Ok(self.client.delete_firewall(&state.id).await?)
    }

    fn import_state(&self, id: &str) -> Result<FirewallState> {
        Ok(FirewallState {
            id: id.to_string(),
            ..FirewallState::default()
        })
    }
}
