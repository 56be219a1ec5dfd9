//! `utho_cloud_instance`

use super::adapter::{ResourceAdapter, Result};
use crate::api::cloud_instance::{
    Cloud, CloudFirewall, CloudHostname, CloudInstanceCreated, CreateCloudInstanceRequest,
    Dclocation, PrivateV4, PublicV4, Snapshot, Storage,
};
use crate::api::UthoClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudInstanceState {
    pub name: String,
    pub dcslug: String,
    pub image: String,
    pub planid: String,
    pub vpc_id: String,
    pub root_password: String,
    pub firewall: String,
    pub enablebackup: bool,
    pub backupid: String,
    pub snapshotid: String,
    pub sshkeys: String,
    pub billingcycle: String,

    pub id: String,
    pub ip: String,
    pub cpu: String,
    pub ram: String,
    pub managed_os: String,
    pub managed_full: String,
    pub managed_onetime: String,
    pub plan_disksize: i64,
    pub disksize: i64,
    pub ha: String,
    pub status: String,
    pub iso: String,
    pub cost: f64,
    pub vmcost: f64,
    pub imagecost: i64,
    pub backupcost: i64,
    pub hourlycost: f64,
    pub cloudhourlycost: f64,
    pub imagehourlycost: i64,
    pub backuphourlycost: i64,
    pub creditrequired: f64,
    pub creditreserved: i64,
    pub nextinvoiceamount: f64,
    pub nextinvoicehours: String,
    pub consolepassword: String,
    pub powerstatus: String,
    pub created_at: String,
    pub updated_at: String,
    pub nextduedate: String,
    pub bandwidth: String,
    pub bandwidth_used: i64,
    pub bandwidth_free: i64,
    pub gpu_available: String,

    pub dclocation: Dclocation,
    pub public_network: Vec<PublicV4>,
    pub private_network: Vec<PrivateV4>,
    pub storages: Vec<Storage>,
    pub snapshots: Vec<Snapshot>,
    pub firewalls: Vec<CloudFirewall>,
}

impl CloudInstanceState {
    /// Copy every server-computed field from a read.
    fn apply(&mut self, cloud: Cloud) {
        self.enablebackup = cloud.features.backups == "1";
        self.cpu = cloud.cpu;
        self.ram = cloud.ram;
        self.managed_os = cloud.managed_os;
        self.managed_full = cloud.managed_full;
        self.managed_onetime = cloud.managed_onetime;
        self.plan_disksize = cloud.plan_disksize;
        self.disksize = cloud.disksize;
        self.ha = cloud.ha;
        self.status = cloud.status;
        self.iso = cloud.iso;
        self.cost = cloud.cost;
        self.vmcost = cloud.vmcost;
        self.imagecost = cloud.imagecost;
        self.backupcost = cloud.backupcost;
        self.hourlycost = cloud.hourlycost;
        self.cloudhourlycost = cloud.cloudhourlycost;
        self.imagehourlycost = cloud.imagehourlycost;
        self.backuphourlycost = cloud.backuphourlycost;
        self.creditrequired = cloud.creditrequired;
        self.creditreserved = cloud.creditreserved;
        self.nextinvoiceamount = cloud.nextinvoiceamount;
        self.nextinvoicehours = cloud.nextinvoicehours;
        self.consolepassword = cloud.consolepassword;
        self.powerstatus = cloud.powerstatus;
        self.created_at = cloud.created_at;
        self.updated_at = cloud.updated_at;
        self.nextduedate = cloud.nextduedate;
        self.bandwidth = cloud.bandwidth;
        self.bandwidth_used = cloud.bandwidth_used;
        self.bandwidth_free = cloud.bandwidth_free;
        self.gpu_available = cloud.gpu_available;
        self.dclocation = cloud.dclocation;
        self.public_network = cloud.networks.public.v4;
        self.private_network = cloud.networks.private.v4;
        self.storages = cloud.storages;
        self.snapshots = cloud.snapshots;
        self.firewalls = cloud.firewalls;
    }
}

pub struct CloudInstanceResource {
    client: UthoClient,
}

impl CloudInstanceResource {
    pub fn new(client: UthoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceAdapter for CloudInstanceResource {
    const TYPE_NAME: &'static str = "utho_cloud_instance";
    const KIND: &'static str = "cloud instance";
    type State = CloudInstanceState;
    type Created = CloudInstanceCreated;

    async fn submit(&self, plan: &CloudInstanceState) -> Result<CloudInstanceCreated> {
        let request = CreateCloudInstanceRequest {
            dcslug: plan.dcslug.clone(),
            image: plan.image.clone(),
            planid: plan.planid.clone(),
            vpc: plan.vpc_id.clone(),
            root_password: plan.root_password.clone(),
            firewall: plan.firewall.clone(),
            enablebackup: plan.enablebackup.to_string(),
            billingcycle: plan.billingcycle.clone(),
            backupid: plan.backupid.clone(),
            snapshotid: plan.snapshotid.clone(),
            sshkeys: plan.sshkeys.clone(),
            cloud: vec![CloudHostname {
                hostname: plan.name.clone(),
            }],
        };
        tracing::debug!("deploy cloud instance {}", plan.name);
        Ok(self.client.create_cloud_instance(&request).await?)
    }

    /// The deploy reply only has the id, generated password and address;
    /// everything else comes from a follow-up read.
    async fn settle(
        &self,
        mut plan: CloudInstanceState,
        created: CloudInstanceCreated,
    ) -> Result<CloudInstanceState> {
        let cloud = self.client.get_cloud_instance(&created.cloudid).await?;
        plan.apply(cloud);
        plan.id = created.cloudid;
        plan.root_password = created.password;
        plan.ip = created.ipv4;
        Ok(plan)
    }

    async fn read(&self, mut prior: CloudInstanceState) -> Result<CloudInstanceState> {
        let cloud = self.client.get_cloud_instance(&prior.id).await?;
        prior.name = cloud.hostname.clone();
        prior.dcslug = cloud.dclocation.dc.clone();
        prior.image = cloud.image.image.clone();
        prior.billingcycle = cloud.billingcycle.clone();
        prior.id = cloud.cloudid.clone();
        prior.ip = cloud.ip.clone();
        prior.apply(cloud);
        Ok(prior)
    }

    async fn delete(&self, state: &CloudInstanceState) -> Result<()> {
        Ok(self.client.delete_cloud_instance(&state.id).await?)
    }

    fn import_state(&self, id: &str) -> Result<CloudInstanceState> {
        Ok(CloudInstanceState {
            id: id.to_string(),
            ..CloudInstanceState::default()
        })
    }
}
