//! `utho_auto_scaling`

use super::adapter::{parse_flag, ResourceAdapter, Result};
use crate::api::auto_scaling::{
    AutoScalingCreated, AutoScalingGroup, CreateAutoScalingRequest, GroupInstance,
    GroupLoadbalancer, GroupPlan, GroupSecurityGroup, GroupTargetGroup, GroupVpc, Policy,
    PolicyRequest, Schedule, ScheduleRequest, UpdateAutoScalingRequest,
};
use crate::api::cloud_instance::Dclocation;
use crate::api::UthoClient;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScalingState {
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
    pub public_ip_enabled: bool,
    pub cooldown_till: String,
    pub backupid: String,
    pub stackid: String,
    pub stackimage: String,
    pub vpc_id: String,
    pub loadbalancers_id: String,
    pub security_group_id: String,
    pub target_groups_id: String,
    pub os_disk_size: i64,
    pub policies: Vec<Policy>,
    pub schedules: Vec<ScheduleState>,
    pub vpc: Vec<GroupVpc>,
    pub load_balancers: Vec<GroupLoadbalancer>,
    pub target_groups: Vec<GroupTargetGroup>,
    pub security_groups: Vec<GroupSecurityGroup>,
    pub instances: Vec<GroupInstance>,
    pub dclocation: Dclocation,
    pub plan: GroupPlan,
}

/// A scheduled resize. `selected_time`/`selected_date` are plan inputs the
/// API does not list back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleState {
    pub id: String,
    pub groupid: String,
    pub name: String,
    pub desiredsize: String,
    pub recurrence: String,
    pub start_date: String,
    pub status: String,
    pub timezone: String,
    pub selected_time: String,
    pub selected_date: String,
}

fn schedule_requests(schedules: &[ScheduleState], now: DateTime<Utc>) -> Vec<ScheduleRequest> {
    let start_date = now.to_rfc3339();
    schedules
        .iter()
        .map(|s| ScheduleRequest {
            name: s.name.clone(),
            desiredsize: s.desiredsize.clone(),
            start_date: start_date.clone(),
            selected_time: s.selected_time.clone(),
            selected_date: s.selected_date.clone(),
        })
        .collect()
}

/// Listed schedules, keeping the plan-only fields of the entry at the same
/// position in `prior`.
fn observed_schedules(listed: Vec<Schedule>, prior: &[ScheduleState]) -> Vec<ScheduleState> {
    listed
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let planned = prior.get(i);
            ScheduleState {
                id: s.id,
                groupid: s.groupid,
                name: s.name,
                desiredsize: s.desiredsize,
                recurrence: s.recurrence,
                start_date: s.start_date,
                status: s.status,
                timezone: s.timezone,
                selected_time: planned.map(|p| p.selected_time.clone()).unwrap_or_default(),
                selected_date: planned.map(|p| p.selected_date.clone()).unwrap_or_default(),
            }
        })
        .collect()
}

impl AutoScalingState {
    /// Merge a group listing into this state. Inputs the API does not echo
    /// (datacenter, stack, attachment ids, disk size) are left as they are.
    fn apply(&mut self, group: AutoScalingGroup) -> Result<()> {
        self.public_ip_enabled = parse_flag("public_ip_enabled", &group.public_ip_enabled)?;
        if let Some(vpc) = group.vpc.first() {
            self.vpc_id = vpc.id.clone();
        }
        self.schedules = observed_schedules(group.schedules, &self.schedules);

        self.userid = group.userid;
        self.name = group.name;
        self.minsize = group.minsize;
        self.maxsize = group.maxsize;
        self.desiredsize = group.desiredsize;
        self.planid = group.planid;
        self.planname = group.planname;
        self.instance_templateid = group.instance_templateid;
        self.stackimage = group.image.clone();
        self.image = group.image;
        self.image_name = group.image_name;
        self.snapshotid = group.snapshotid;
        self.status = group.status;
        self.created_at = group.created_at;
        self.suspended_at = group.suspended_at;
        self.stopped_at = group.stopped_at;
        self.started_at = group.started_at;
        self.deleted_at = group.deleted_at;
        self.cooldown_till = group.cooldown_till;
        self.backupid = group.backupid;
        self.policies = group.policies;
        self.vpc = group.vpc;
        self.load_balancers = group.load_balancers;
        self.target_groups = group.target_groups;
        self.security_groups = group.security_groups;
        self.instances = group.instances;
        self.dclocation = group.dclocation;
        self.plan = group.plan;
        Ok(())
    }
}

pub struct AutoScalingResource {
    client: UthoClient,
}

impl AutoScalingResource {
    pub fn new(client: UthoClient) -> Self {
        Self { client }
    }

    fn create_request(plan: &AutoScalingState, now: DateTime<Utc>) -> CreateAutoScalingRequest {
        CreateAutoScalingRequest {
            name: plan.name.clone(),
            dcslug: plan.dcslug.clone(),
            planid: plan.planid.clone(),
            planname: plan.planname.clone(),
            os_disk_size: plan.os_disk_size,
            minsize: plan.minsize.clone(),
            maxsize: plan.maxsize.clone(),
            desiredsize: plan.desiredsize.clone(),
            instance_templateid: plan.instance_templateid.clone(),
            public_ip_enabled: plan.public_ip_enabled,
            vpc: plan.vpc_id.clone(),
            load_balancers: plan.loadbalancers_id.clone(),
            security_groups: plan.security_group_id.clone(),
            target_groups: plan.target_groups_id.clone(),
            stack: plan.stackid.clone(),
            stackid: plan.stackid.clone(),
            stackimage: plan.stackimage.clone(),
            policies: plan
                .policies
                .iter()
                .map(|p| PolicyRequest {
                    name: p.name.clone(),
                    kind: p.kind.clone(),
                    compare: p.compare.clone(),
                    value: p.value.clone(),
                    adjust: p.adjust.clone(),
                    period: p.period.clone(),
                    cooldown: p.cooldown.clone(),
                })
                .collect(),
            schedules: schedule_requests(&plan.schedules, now),
        }
    }
}

#[async_trait]
impl ResourceAdapter for AutoScalingResource {
    const TYPE_NAME: &'static str = "utho_auto_scaling";
    const KIND: &'static str = "auto scaling group";
    type State = AutoScalingState;
    type Created = AutoScalingCreated;

    async fn submit(&self, plan: &AutoScalingState) -> Result<AutoScalingCreated> {
        let request = Self::create_request(plan, Utc::now());
        Ok(self.client.create_auto_scaling(&request).await?)
    }

    async fn settle(
        &self,
        mut plan: AutoScalingState,
        created: AutoScalingCreated,
    ) -> Result<AutoScalingState> {
        plan.id = created.id.to_string();
        let group = self.client.get_auto_scaling(&plan.id).await?;
        plan.apply(group)?;
        Ok(plan)
    }

    async fn read(&self, mut prior: AutoScalingState) -> Result<AutoScalingState> {
        let group = self.client.get_auto_scaling(&prior.id).await?;
        prior.apply(group)?;
        Ok(prior)
    }

    /// Only the name and the three sizes can change in place.
    async fn update(
        &self,
        plan: AutoScalingState,
        mut prior: AutoScalingState,
    ) -> Result<AutoScalingState> {
        let request = UpdateAutoScalingRequest {
            name: plan.name,
            minsize: plan.minsize,
            maxsize: plan.maxsize,
            desiredsize: plan.desiredsize,
        };
        self.client.update_auto_scaling(&prior.id, &request).await?;

        let group = self.client.get_auto_scaling(&prior.id).await?;
        prior.apply(group)?;
        Ok(prior)
    }

    async fn delete(&self, state: &AutoScalingState) -> Result<()> {
        Ok(self
            .client
            .delete_auto_scaling(&state.id, &state.name)
            .await?)
    }

    fn import_state(&self, id: &str) -> Result<AutoScalingState> {
        Ok(AutoScalingState {
            id: id.to_string(),
            ..AutoScalingState::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::adapter::AdapterError;
    use chrono::TimeZone;

    #[test]
    fn test_schedules_sent_with_current_start_date() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let plan = AutoScalingState {
            schedules: vec![ScheduleState {
                name: "night".into(),
                desiredsize: "1".into(),
                selected_time: "22:00".into(),
                selected_date: "mon".into(),
                ..ScheduleState::default()
            }],
            ..AutoScalingState::default()
        };

        let request = AutoScalingResource::create_request(&plan, now);
        assert_eq!(request.schedules.len(), 1);
        assert_eq!(request.schedules[0].start_date, "2024-05-01T12:30:00+00:00");
        assert_eq!(request.schedules[0].selected_time, "22:00");
    }

    #[test]
    fn test_stack_id_sent_as_stack() {
        let plan = AutoScalingState {
            stackid: "77".into(),
            ..AutoScalingState::default()
        };
        let request = AutoScalingResource::create_request(&plan, Utc::now());
        assert_eq!(request.stack, "77");
        assert_eq!(request.stackid, "77");
    }

    #[test]
    fn test_apply_keeps_local_inputs() {
        let mut state = AutoScalingState {
            dcslug: "inmumbaizone2".into(),
            os_disk_size: 80,
            vpc_id: "planned-vpc".into(),
            schedules: vec![ScheduleState {
                selected_time: "22:00".into(),
                ..ScheduleState::default()
            }],
            ..AutoScalingState::default()
        };
        let group = AutoScalingGroup {
            name: "web".into(),
            public_ip_enabled: "1".into(),
            image: "ubuntu".into(),
            schedules: vec![Schedule {
                id: "5".into(),
                ..Schedule::default()
            }],
            ..AutoScalingGroup::default()
        };

        state.apply(group).unwrap();
        assert_eq!(state.name, "web");
        assert!(state.public_ip_enabled);
        assert_eq!(state.stackimage, "ubuntu");
        assert_eq!(state.dcslug, "inmumbaizone2");
        assert_eq!(state.os_disk_size, 80);
        assert_eq!(state.vpc_id, "planned-vpc");
        assert_eq!(state.schedules[0].id, "5");
        assert_eq!(state.schedules[0].selected_time, "22:00");
    }

    #[test]
    fn test_apply_takes_first_vpc() {
        let mut state = AutoScalingState::default();
        let group = AutoScalingGroup {
            public_ip_enabled: "false".into(),
            vpc: vec![
                GroupVpc {
                    id: "a".into(),
                    ..GroupVpc::default()
                },
                GroupVpc {
                    id: "b".into(),
                    ..GroupVpc::default()
                },
            ],
            ..AutoScalingGroup::default()
        };
        state.apply(group).unwrap();
        assert_eq!(state.vpc_id, "a");
        assert!(!state.public_ip_enabled);
    }

    #[test]
    fn test_apply_rejects_unparseable_flag() {
        let mut state = AutoScalingState::default();
        let group = AutoScalingGroup {
            public_ip_enabled: "maybe".into(),
            ..AutoScalingGroup::default()
        };
        let err = state.apply(group).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidFlag { field: "public_ip_enabled", .. }));
    }
}
