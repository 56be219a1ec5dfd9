//! Auto-scaling group endpoints

use super::client::{segment, UthoClient};
use super::cloud_instance::Dclocation;
use super::envelope::{first_or_not_found, Envelope};
use super::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AutoScalingGroup {
    pub id: String,
    pub userid: String,
    pub name: String,
    pub dcslug: String,
    pub minsize: String,
    pub maxsize: String,
    pub desiredsize: String,
    pub planid: String,
    pub planname: String,
    pub instance_templateid: String,
    pub image: String,
    pub image_name: String,
    pub snapshotid: String,
    pub status: String,
    pub created_at: String,
    pub suspended_at: String,
    pub stopped_at: String,
    pub started_at: String,
    pub deleted_at: String,
    pub public_ip_enabled: String,
    pub cooldown_till: String,
    pub backupid: String,
    pub stack: String,
    pub policies: Vec<Policy>,
    pub schedules: Vec<Schedule>,
    pub vpc: Vec<GroupVpc>,
    pub load_balancers: Vec<GroupLoadbalancer>,
    pub target_groups: Vec<GroupTargetGroup>,
    pub security_groups: Vec<GroupSecurityGroup>,
    pub instances: Vec<GroupInstance>,
    pub dclocation: Dclocation,
    pub plan: GroupPlan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub id: String,
    pub userid: String,
    pub product: String,
    pub productid: String,
    pub groupid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub adjust: String,
    pub period: String,
    pub cooldown: String,
    pub cooldown_till: String,
    pub compare: String,
    pub value: String,
    pub alert_id: String,
    pub status: String,
    pub kubernetes_id: String,
    pub kubernetes_nodepool: String,
    pub cloudid: String,
    pub maxsize: String,
    pub minsize: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub id: String,
    pub groupid: String,
    pub name: String,
    pub desiredsize: String,
    pub recurrence: String,
    pub start_date: String,
    pub status: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupVpc {
    pub id: String,
    pub total: i64,
    pub available: i64,
    pub network: String,
    pub name: String,
    pub size: String,
    pub dcslug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupLoadbalancer {
    pub lbid: String,
    pub name: String,
    pub ip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupTargetGroup {
    pub id: String,
    pub name: String,
    pub protocol: String,
    pub port: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupSecurityGroup {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupInstance {
    pub cloudid: String,
    pub hostname: String,
    pub created_at: String,
    pub ip: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupPlan {
    pub planid: String,
    pub ram: String,
    pub cpu: String,
    pub disk: String,
    pub bandwidth: String,
    pub dedicated_vcore: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AutoScalingGroups {
    groups: Vec<AutoScalingGroup>,
    #[serde(flatten)]
    envelope: Envelope,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAutoScalingRequest {
    pub name: String,
    pub dcslug: String,
    pub planid: String,
    pub planname: String,
    pub os_disk_size: i64,
    pub minsize: String,
    pub maxsize: String,
    pub desiredsize: String,
    pub instance_templateid: String,
    pub public_ip_enabled: bool,
    pub vpc: String,
    pub load_balancers: String,
    pub security_groups: String,
    pub target_groups: String,
    pub stack: String,
    pub stackid: String,
    pub stackimage: String,
    pub policies: Vec<PolicyRequest>,
    pub schedules: Vec<ScheduleRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub compare: String,
    pub value: String,
    pub adjust: String,
    pub period: String,
    pub cooldown: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub name: String,
    pub desiredsize: String,
    pub start_date: String,
    pub selected_time: String,
    pub selected_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAutoScalingRequest {
    pub name: String,
    pub minsize: String,
    pub maxsize: String,
    pub desiredsize: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AutoScalingCreated {
    pub id: i64,
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl UthoClient {
    pub async fn create_auto_scaling(
        &self,
        request: &CreateAutoScalingRequest,
    ) -> Result<AutoScalingCreated> {
        let created: AutoScalingCreated = self.post("autoscaling", request).await?;
        created.envelope.ensure_success()?;
        Ok(created)
    }

    pub async fn get_auto_scaling(&self, id: &str) -> Result<AutoScalingGroup> {
        let reply: AutoScalingGroups = self.get(&format!("autoscaling/{}", segment(id))).await?;
        reply.envelope.ensure_success()?;
        first_or_not_found(reply.groups, "auto scaling group")
    }

    pub async fn update_auto_scaling(
        &self,
        id: &str,
        request: &UpdateAutoScalingRequest,
    ) -> Result<()> {
        let reply: Envelope = self
            .put(&format!("autoscaling/{}", segment(id)), request)
            .await?;
        reply.ensure_success()
    }

    pub async fn delete_auto_scaling(&self, id: &str, name: &str) -> Result<()> {
        let path = format!("autoscaling/{}?name={}", segment(id), segment(name));
        let reply: Envelope = self.delete(&path).await?;
        reply.ensure_success()
    }
}
