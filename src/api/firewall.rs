//! Firewall endpoints

use super::client::{segment, UthoClient};
use super::envelope::{first_or_not_found, Envelope};
use super::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Firewall {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub rulecount: String,
    pub serverscount: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Firewalls {
    firewalls: Vec<Firewall>,
    #[serde(flatten)]
    envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirewallRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FirewallCreated {
    #[serde(rename = "firewallid")]
    pub id: String,
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl UthoClient {
    pub async fn create_firewall(&self, request: &FirewallRequest) -> Result<FirewallCreated> {
        let created: FirewallCreated = self.post("firewall/create", request).await?;
        created.envelope.ensure_success()?;
        Ok(created)
    }

    pub async fn get_firewall(&self, id: &str) -> Result<Firewall> {
        let reply: Firewalls = self.get(&format!("firewall/{}", segment(id))).await?;
        reply.envelope.ensure_not_failed()?;
        first_or_not_found(reply.firewalls, "firewall")
    }

    pub async fn delete_firewall(&self, id: &str) -> Result<()> {
        let reply: Envelope = self
            .delete(&format!("firewall/{}/destroy", segment(id)))
            .await?;
        reply.ensure_success()
    }
}
