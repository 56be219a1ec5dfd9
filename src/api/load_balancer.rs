//! Load balancer endpoints

use super::client::{segment, UthoClient};
use super::envelope::{first_or_not_found, Envelope};
use super::error::Result;
use serde::{Deserialize, Serialize};

/// Load balancer as listed by the API. Its own `status` field is the
/// balancer's state, not an envelope status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Loadbalancer {
    pub id: String,
    pub userid: String,
    pub ip: String,
    pub name: String,
    pub algorithm: String,
    pub cookie: String,
    pub cookiename: String,
    pub redirecthttps: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub country: String,
    pub cc: String,
    pub city: String,
    pub backendcount: String,
    pub created_at: String,
    pub status: String,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Rule {
    pub id: String,
    pub lb: String,
    pub src_proto: String,
    pub src_port: String,
    pub dst_proto: String,
    pub dst_port: String,
    pub timeadded: String,
    pub timeupdated: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Loadbalancers {
    loadbalancers: Vec<Loadbalancer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadbalancerRequest {
    pub dcslug: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoadbalancerCreated {
    #[serde(rename = "loadbalancerid")]
    pub id: String,
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl UthoClient {
    pub async fn create_load_balancer(
        &self,
        request: &LoadbalancerRequest,
    ) -> Result<LoadbalancerCreated> {
        let created: LoadbalancerCreated = self.post("loadbalancer", request).await?;
        created.envelope.ensure_success()?;
        Ok(created)
    }

    pub async fn get_load_balancer(&self, id: &str) -> Result<Loadbalancer> {
        let reply: Loadbalancers = self.get(&format!("loadbalancer/{}", segment(id))).await?;
        first_or_not_found(reply.loadbalancers, "load balancer")
    }

    pub async fn delete_load_balancer(&self, id: &str) -> Result<()> {
        let reply: Envelope = self.delete(&format!("loadbalancer/{}", segment(id))).await?;
        reply.ensure_success()
    }
}
