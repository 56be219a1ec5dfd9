//! `utho_vpc`

use super::adapter::{ResourceAdapter, Result};
use crate::api::vpc::{Vpc, VpcRequest};
use crate::api::UthoClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Plan used when none is given
pub const DEFAULT_PLAN_ID: &str = "1008";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VpcState {
    pub id: String,
    pub name: String,
    pub dcslug: String,
    pub planid: String,
    pub network: String,
    pub size: String,
    pub total: i64,
    pub available: i64,
}

pub struct VpcResource {
    client: UthoClient,
}

impl VpcResource {
    pub fn new(client: UthoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceAdapter for VpcResource {
    const TYPE_NAME: &'static str = "utho_vpc";
    const KIND: &'static str = "vpc";
    type State = VpcState;
    type Created = Vpc;

    fn modify_plan(&self, plan: &mut VpcState) {
        if plan.planid.is_empty() {
            plan.planid = DEFAULT_PLAN_ID.to_string();
        }
    }

    async fn submit(&self, plan: &VpcState) -> Result<Vpc> {
        let request = VpcRequest {
            dcslug: plan.dcslug.clone(),
            name: plan.name.clone(),
            planid: plan.planid.clone(),
            network: plan.network.clone(),
            size: plan.size.clone(),
        };
        Ok(self.client.create_vpc(&request).await?)
    }

    /// Capacity counters only exist on the follow-up read.
    async fn settle(&self, plan: VpcState, created: Vpc) -> Result<VpcState> {
        let vpc = self.client.get_vpc(&created.id).await?;
        Ok(VpcState {
            id: created.id,
            total: vpc.total,
            available: vpc.available,
            ..plan
        })
    }

    async fn read(&self, prior: VpcState) -> Result<VpcState> {
        let vpc = self.client.get_vpc(&prior.id).await?;
        Ok(VpcState {
            id: vpc.id,
            name: vpc.name,
            dcslug: vpc.dcslug,
            planid: prior.planid,
            network: vpc.network,
            size: vpc.size,
            total: vpc.total,
            available: vpc.available,
        })
    }

    async fn delete(&self, state: &VpcState) -> Result<()> {
        Ok(self.client.delete_vpc(&state.id).await?)
    }

    fn import_state(&self, id: &str) -> Result<VpcState> {
        Ok(VpcState {
            id: id.to_string(),
            ..VpcState::default()
        })
    }
}
