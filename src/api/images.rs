//! OS image catalogue

use super::client::UthoClient;
use super::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub distro: String,
    pub distribution: String,
    pub version: String,
    pub image: String,
    pub cost: i64,
}

impl UthoClient {
    pub async fn get_images(&self) -> Result<Images> {
        self.get_ok("cloud/images", "images data").await
    }
}
