//! Object storage pricing plans

use super::client::UthoClient;
use super::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectStoragePlan {
    pub pricing: Vec<Pricing>,
    pub rcode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub id: String,
    pub uuid: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub disk: String,
    pub ram: String,
    pub cpu: String,
    pub bandwidth: String,
    pub is_featured: String,
    pub dedicated_vcore: String,
    pub price: String,
    pub monthly: String,
}

impl UthoClient {
    pub async fn get_object_storage_plan(&self) -> Result<ObjectStoragePlan> {
        self.get_ok("pricing/objectstorage", "object storage plan data")
            .await
    }
}
