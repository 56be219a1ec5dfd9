//! `utho_target_group`

use super::adapter::{ResourceAdapter, Result};
use crate::api::target_group::{Target, TargetGroup, TargetGroupCreated, TargetGroupRequest, TargetRequest};
use crate::api::UthoClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetGroupState {
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
    pub targets: Vec<TargetState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetState {
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

impl From<Target> for TargetState {
    fn from(t: Target) -> Self {
        Self {
            id: t.id,
            lbid: t.lbid,
            ip: t.ip,
            cloudid: t.cloudid,
            status: t.status,
            scaling_groupid: t.scaling_groupid,
            kubernetes_clusterid: t.kubernetes_clusterid,
            backend_port: t.backend_port,
            backend_protocol: t.backend_protocol,
            targetgroup_id: t.targetgroup_id,
            frontend_id: t.frontend_id,
        }
    }
}

impl TargetGroupState {
    fn request(&self) -> TargetGroupRequest {
        TargetGroupRequest {
            name: self.name.clone(),
            protocol: self.protocol.clone(),
            port: self.port.clone(),
            health_check_path: self.health_check_path.clone(),
            health_check_protocol: self.health_check_protocol.clone(),
            health_check_interval: self.health_check_interval.clone(),
            health_check_timeout: self.health_check_timeout.clone(),
            healthy_threshold: self.healthy_threshold.clone(),
            unhealthy_threshold: self.unhealthy_threshold.clone(),
        }
    }

    fn observed(id: String, group: TargetGroup) -> Self {
        Self {
            id,
            name: group.name,
            port: group.port,
            protocol: group.protocol,
            health_check_path: group.health_check_path,
            health_check_interval: group.health_check_interval,
            health_check_protocol: group.health_check_protocol,
            health_check_timeout: group.health_check_timeout,
            healthy_threshold: group.healthy_threshold,
            unhealthy_threshold: group.unhealthy_threshold,
            created_at: group.created_at,
            updated_at: group.updated_at,
            targets: group.targets.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct TargetGroupResource {
    client: UthoClient,
}

impl TargetGroupResource {
    pub fn new(client: UthoClient) -> Self {
        Self { client }
    }

    async fn observe(&self, id: String) -> Result<TargetGroupState> {
        let group = self.client.get_target_group(&id).await?;
        Ok(TargetGroupState::observed(id, group))
    }
}

#[async_trait]
impl ResourceAdapter for TargetGroupResource {
    const TYPE_NAME: &'static str = "utho_target_group";
    const KIND: &'static str = "target group";
    type State = TargetGroupState;
    type Created = TargetGroupCreated;

    /// Creates the group and then every planned target, in order. A failing
    /// target leaves the group and the earlier targets in place.
    async fn submit(&self, plan: &TargetGroupState) -> Result<TargetGroupCreated> {
        let targets: Vec<TargetRequest> = plan
            .targets
            .iter()
            .map(|t| TargetRequest {
                backend_protocol: t.backend_protocol.clone(),
                backend_port: t.backend_port.clone(),
                ip: t.ip.clone(),
                cloudid: t.cloudid.clone(),
            })
            .collect();

        Ok(self
            .client
            .create_target_group(&plan.request(), &targets)
            .await?)
    }

    async fn settle(
        &self,
        _plan: TargetGroupState,
        created: TargetGroupCreated,
    ) -> Result<TargetGroupState> {
        self.observe(created.id.to_string()).await
    }

    async fn read(&self, prior: TargetGroupState) -> Result<TargetGroupState> {
        self.observe(prior.id).await
    }

    /// Group settings only; targets are fixed at creation.
    async fn update(
        &self,
        plan: TargetGroupState,
        prior: TargetGroupState,
    ) -> Result<TargetGroupState> {
        self.client
            .update_target_group(&prior.id, &plan.request())
            .await?;
        self.observe(prior.id).await
    }

    async fn delete(&self, state: &TargetGroupState) -> Result<()> {
        Ok(self
            .client
            .delete_target_group(&state.id, &state.name)
            .await?)
    }

    fn import_state(&self, id: &str) -> Result<TargetGroupState> {
        Ok(TargetGroupState {
            id: id.to_string(),
            ..TargetGroupState::default()
        })
    }
}
