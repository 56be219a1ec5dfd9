//! `utho_sqs`

use super::adapter::{ResourceAdapter, Result};
use crate::api::sqs::{SqsCreated, SqsRequest};
use crate::api::UthoClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqsState {
    pub id: String,
    pub name: String,
    pub dcslug: String,
    pub planid: String,
    pub userid: String,
    pub cloudid: String,
    pub status: String,
    pub created_at: String,
    pub ip: String,
    pub count: String,
}

pub struct SqsResource {
    client: UthoClient,
}

impl SqsResource {
    pub fn new(client: UthoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceAdapter for SqsResource {
    const TYPE_NAME: &'static str = "utho_sqs";
    const KIND: &'static str = "sqs";
    type State = SqsState;
    type Created = SqsCreated;

    async fn submit(&self, plan: &SqsState) -> Result<SqsCreated> {
        let request = SqsRequest {
            name: plan.name.clone(),
            dcslug: plan.dcslug.clone(),
            planid: plan.planid.clone(),
        };
        Ok(self.client.create_sqs(&request).await?)
    }

    async fn settle(&self, plan: SqsState, created: SqsCreated) -> Result<SqsState> {
        let prior = SqsState {
            id: created.id,
            ..plan
        };
        ResourceAdapter::read(self, prior).await
    }

    /// Datacenter and plan are not part of the queue listing.
    async fn read(&self, prior: SqsState) -> Result<SqsState> {
        let sqs = self.client.get_sqs(&prior.id).await?;
        Ok(SqsState {
            id: if sqs.id.is_empty() { prior.id } else { sqs.id },
            name: sqs.name,
            dcslug: prior.dcslug,
            planid: prior.planid,
            userid: sqs.userid,
            cloudid: sqs.cloudid,
            status: sqs.status,
            created_at: sqs.created_at,
            ip: sqs.ip,
            count: sqs.count,
        })
    }

    async fn delete(&self, state: &SqsState) -> Result<()> {
        Ok(self.client.delete_sqs(&state.id, &state.name).await?)
    }

    fn import_state(&self, id: &str) -> Result<SqsState> {
        Ok(SqsState {
            id: id.to_string(),
            ..SqsState::default()
        })
    }
}
