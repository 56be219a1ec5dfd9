//! VPC endpoints

use super::client::{segment, UthoClient};
use super::envelope::Envelope;
use super::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Vpc {
    pub id: String,
    pub name: String,
    pub size: String,
    pub total: i64,
    pub available: i64,
    pub network: String,
    pub dcslug: String,
    pub is_default: String,
    #[serde(flatten)]
    pub envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpcRequest {
    pub dcslug: String,
    pub name: String,
    pub planid: String,
    pub network: String,
    pub size: String,
}

impl UthoClient {
    pub async fn create_vpc(&self, request: &VpcRequest) -> Result<Vpc> {
        let vpc: Vpc = self.post("vpc/create", request).await?;
        vpc.envelope.ensure_success()?;
        Ok(vpc)
    }

    /// Single-object read: a reply without `status: success` is a failure.
    pub async fn get_vpc(&self, id: &str) -> Result<Vpc> {
        let vpc: Vpc = self.get(&format!("vpc/{}", segment(id))).await?;
        vpc.envelope.ensure_success()?;
        Ok(vpc)
    }

    pub async fn delete_vpc(&self, id: &str) -> Result<()> {
        let reply: Envelope = self.delete(&format!("vpc/{}/destroy", segment(id))).await?;
        reply.ensure_success()
    }
}
