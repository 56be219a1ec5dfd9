//! Target group endpoints

use super::client::{segment, UthoClient};
use super::envelope::{last_match_or_not_found, Envelope};
use super::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TargetGroup {
    pub id: String,
    pub name: String,
    pub port: String,
    pub protocol: String,
    pub health_check_path: String,
    pub health_check_interval: String,
    pub health_check_protocol: String,
    pub health_check_timeout: String,
    pub healthy_threshold: String,
    pub unhealthy_threshold: String,
    pub created_at: String,
    pub updated_at: String,
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Target {
    pub id: String,
    pub lbid: String,
    pub ip: String,
    pub cloudid: String,
    pub status: String,
    pub scaling_groupid: String,
    pub kubernetes_clusterid: String,
    pub backend_port: String,
    pub backend_protocol: String,
    pub targetgroup_id: String,
    pub frontend_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TargetGroups {
    targetgroups: Vec<TargetGroup>,
    #[serde(flatten)]
    envelope: Envelope,
}

/// Group configuration, shared by create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetGroupRequest {
    pub name: String,
    pub protocol: String,
    pub port: String,
    pub health_check_path: String,
    pub health_check_protocol: String,
    pub health_check_interval: String,
    pub health_check_timeout: String,
    pub healthy_threshold: String,
    pub unhealthy_threshold: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetRequest {
    pub backend_protocol: String,
    pub backend_port: String,
    pub ip: String,
    pub cloudid: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TargetGroupCreated {
    pub id: i64,
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl UthoClient {
    /// Create the group, then each target in order.
    ///
    /// Not transactional: if target N fails, the group and targets 1..N-1
    /// stay on the account and the error is returned as is.
    pub async fn create_target_group(
        &self,
        request: &TargetGroupRequest,
        targets: &[TargetRequest],
    ) -> Result<TargetGroupCreated> {
        let created: TargetGroupCreated = self.post("targetgroup", request).await?;
        created.envelope.ensure_success()?;

        let group_id = created.id.to_string();
        for target in targets {
            self.create_target(&group_id, target).await?;
        }

        Ok(created)
    }

    pub async fn create_target(&self, group_id: &str, target: &TargetRequest) -> Result<()> {
        let path = format!("targetgroup/{}/target", segment(group_id));
        let reply: Envelope = self.post(&path, target).await?;
        reply.ensure_success()
    }

    /// The API only lists all groups; the requested id is picked out of the
    /// list, last match winning.
    pub async fn get_target_group(&self, id: &str) -> Result<TargetGroup> {
        let reply: TargetGroups = self.get("targetgroup").await?;
        reply.envelope.ensure_success()?;
        last_match_or_not_found(reply.targetgroups, "target group", |group| group.id == id)
    }

    pub async fn update_target_group(&self, id: &str, request: &TargetGroupRequest) -> Result<()> {
        let reply: Envelope = self
            .put(&format!("targetgroup/{}", segment(id)), request)
            .await?;
        reply.ensure_success()
    }

    pub async fn delete_target_group(&self, id: &str, name: &str) -> Result<()> {
        let path = format!("targetgroup/{}?name={}", segment(id), segment(name));
        let reply: Envelope = self.delete(&path).await?;
        reply.ensure_success()
    }
}
