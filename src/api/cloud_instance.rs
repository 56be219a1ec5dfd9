//! Cloud instance endpoints

use super::client::{segment, UthoClient};
use super::envelope::{first_or_not_found, Envelope};
use super::error::Result;
use serde::{Deserialize, Serialize};

/// Text the API requires before it destroys a server.
pub const DELETE_CONFIRMATION: &str =
    "I am aware this action will delete data and server permanently";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cloud {
    pub cloudid: String,
    pub hostname: String,
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
    pub ip: String,
    pub billingcycle: String,
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
    pub features: Features,
    pub image: CloudImage,
    pub dclocation: Dclocation,
    pub networks: Networks,
    pub storages: Vec<Storage>,
    pub snapshots: Vec<Snapshot>,
    pub firewalls: Vec<CloudFirewall>,
    pub gpu_available: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Features {
    pub backups: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CloudImage {
    pub name: String,
    pub distribution: String,
    pub version: String,
    pub image: String,
    pub cost: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dclocation {
    pub location: String,
    pub country: String,
    pub dc: String,
    pub dccc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Networks {
    pub public: PublicNetworks,
    pub private: PrivateNetworks,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PublicNetworks {
    pub v4: Vec<PublicV4>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicV4 {
    pub ip_address: String,
    pub netmask: String,
    pub gateway: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub nat: bool,
    pub primary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PrivateNetworks {
    pub v4: Vec<PrivateV4>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivateV4 {
    pub noip: i64,
    pub ip_address: String,
    pub vpc_name: String,
    pub network: String,
    pub vpc_id: String,
    pub netmask: String,
    pub gateway: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub primary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub id: String,
    pub size: i64,
    pub disk_used: String,
    pub disk_free: String,
    pub disk_usedp: String,
    pub created_at: String,
    pub bus: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub id: String,
    pub size: String,
    pub created_at: String,
    pub note: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudFirewall {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CloudInstances {
    cloud: Vec<Cloud>,
    #[serde(flatten)]
    envelope: Envelope,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCloudInstanceRequest {
    pub dcslug: String,
    pub image: String,
    pub planid: String,
    pub vpc: String,
    pub root_password: String,
    pub firewall: String,
    pub enablebackup: String,
    pub billingcycle: String,
    pub backupid: String,
    pub snapshotid: String,
    pub sshkeys: String,
    pub cloud: Vec<CloudHostname>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudHostname {
    pub hostname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct DeleteCloudInstanceRequest {
    confirm: &'static str,
}

/// Deploy reply: only the id, generated password and primary IPv4.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CloudInstanceCreated {
    pub cloudid: String,
    pub password: String,
    pub ipv4: String,
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl UthoClient {
    pub async fn create_cloud_instance(
        &self,
        request: &CreateCloudInstanceRequest,
    ) -> Result<CloudInstanceCreated> {
        let created: CloudInstanceCreated = self.post("cloud/deploy", request).await?;
        created.envelope.ensure_success()?;
        Ok(created)
    }

    pub async fn get_cloud_instance(&self, id: &str) -> Result<Cloud> {
        let reply: CloudInstances = self.get(&format!("cloud/{}", segment(id))).await?;
        reply.envelope.ensure_not_failed()?;
        first_or_not_found(reply.cloud, "cloud instance")
    }

    pub async fn delete_cloud_instance(&self, id: &str) -> Result<()> {
        let body = DeleteCloudInstanceRequest {
            confirm: DELETE_CONFIRMATION,
        };
        let reply: Envelope = self
            .delete_with_body(&format!("cloud/{}/destroy", segment(id)), &body)
            .await?;
        reply.ensure_success()
    }
}
