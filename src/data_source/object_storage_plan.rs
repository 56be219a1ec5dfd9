use crate::api::object_storage::ObjectStoragePlan;
use crate::api::UthoClient;
use crate::resource::{DataSourceAdapter, Result};
use async_trait::async_trait;

/// `utho_object_storage_plan`: object storage pricing tiers
pub struct ObjectStoragePlanDataSource {
    client: UthoClient,
}

impl ObjectStoragePlanDataSource {
    pub fn new(client: UthoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSourceAdapter for ObjectStoragePlanDataSource {
    const TYPE_NAME: &'static str = "utho_object_storage_plan";
    const KIND: &'static str = "object storage plan";
    type State = ObjectStoragePlan;

    async fn read(&self) -> Result<ObjectStoragePlan> {
        Ok(self.client.get_object_storage_plan().await?)
    }
}
