//! Queue (SQS) endpoints

use super::client::{segment, UthoClient};
use super::envelope::{first_or_not_found, Envelope};
use super::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sqs {
    pub id: String,
    pub name: String,
    pub userid: String,
    pub cloudid: String,
    pub status: String,
    pub created_at: String,
    pub ip: String,
    pub count: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SqsList {
    sqs: Vec<Sqs>,
    #[serde(flatten)]
    envelope: Envelope,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqsRequest {
    pub name: String,
    pub dcslug: String,
    pub planid: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SqsCreated {
    pub id: String,
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl UthoClient {
    pub async fn create_sqs(&self, request: &SqsRequest) -> Result<SqsCreated> {
        let created: SqsCreated = self.post("sqs", request).await?;
        created.envelope.ensure_success()?;
        Ok(created)
    }

    pub async fn get_sqs(&self, id: &str) -> Result<Sqs> {
        let reply: SqsList = self.get(&format!("sqs/{}", segment(id))).await?;
        reply.envelope.ensure_success()?;
        first_or_not_found(reply.sqs, "sqs")
    }

    pub async fn delete_sqs(&self, id: &str, name: &str) -> Result<()> {
        let path = format!("sqs/{}?name={}", segment(id), segment(name));
        let reply: Envelope = self.delete(&path).await?;
        reply.ensure_success()
    }
}
