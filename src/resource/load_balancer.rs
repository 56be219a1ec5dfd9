//! `utho_loadbalancer`

use super::adapter::{ResourceAdapter, Result};
use crate::api::load_balancer::{Loadbalancer, LoadbalancerCreated, LoadbalancerRequest};
use crate::api::UthoClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadbalancerState {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub dcslug: String,
    pub userid: String,
    pub ip: String,
    pub name: String,
    pub algorithm: String,
    pub cookie: String,
    pub cookiename: String,
    pub redirecthttps: String,
    pub country: String,
    pub cc: String,
    pub city: String,
    pub backendcount: String,
    pub created_at: String,
    pub status: String,
}

impl LoadbalancerState {
    /// The API never reports the datacenter slug back.
    fn observed(lb: Loadbalancer, dcslug: String) -> Self {
        Self {
            id: lb.id,
            kind: lb.kind,
            dcslug,
            userid: lb.userid,
            ip: lb.ip,
            name: lb.name,
            algorithm: lb.algorithm,
            cookie: lb.cookie,
            cookiename: lb.cookiename,
            redirecthttps: lb.redirecthttps,
            country: lb.country,
            cc: lb.cc,
            city: lb.city,
            backendcount: lb.backendcount,
            created_at: lb.created_at,
            status: lb.status,
        }
    }
}

pub struct LoadbalancerResource {
    client: UthoClient,
}

impl LoadbalancerResource {
    pub fn new(client: UthoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceAdapter for LoadbalancerResource {
    const TYPE_NAME: &'static str = "utho_loadbalancer";
    const KIND: &'static str = "load balancer";
    type State = LoadbalancerState;
    type Created = LoadbalancerCreated;

    async fn submit(&self, plan: &LoadbalancerState) -> Result<LoadbalancerCreated> {
        let request = LoadbalancerRequest {
            dcslug: plan.dcslug.clone(),
            kind: plan.kind.clone(),
            name: plan.name.clone(),
        };
        Ok(self.client.create_load_balancer(&request).await?)
    }

    async fn settle(
        &self,
        plan: LoadbalancerState,
        created: LoadbalancerCreated,
    ) -> Result<LoadbalancerState> {
        let lb = self.client.get_load_balancer(&created.id).await?;
        Ok(LoadbalancerState::observed(lb, plan.dcslug))
    }

    async fn read(&self, prior: LoadbalancerState) -> Result<LoadbalancerState> {
        let lb = self.client.get_load_balancer(&prior.id).await?;
        Ok(LoadbalancerState::observed(lb, prior.dcslug))
    }

    async fn delete(&self, state: &LoadbalancerState) -> Result<()> {
        Ok(self.client.delete_load_balancer(&state.id).await?)
    }

    fn import_state(&self, id: &str) -> Result<LoadbalancerState> {
        Ok(LoadbalancerState {
            id: id.to_string(),
            ..LoadbalancerState::default()
        })
    }
}
