use crate::api::images::Images;
use crate::api::UthoClient;
use crate::resource::{DataSourceAdapter, Result};
use async_trait::async_trait;

/// `utho_images`: OS images available for deployment
pub struct ImagesDataSource {
    client: UthoClient,
}

impl ImagesDataSource {
    pub fn new(client: UthoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSourceAdapter for ImagesDataSource {
    const TYPE_NAME: &'static str = "utho_images";
    const KIND: &'static str = "images";
    type State = Images;

    async fn read(&self) -> Result<Images> {
        Ok(self.client.get_images().await?)
    }
}
