use crate::api::account::Account;
use crate::api::UthoClient;
use crate::resource::{DataSourceAdapter, Result};
use async_trait::async_trait;

/// `utho_account`: the authenticated user and per-product usage counts
pub struct AccountDataSource {
    client: UthoClient,
}

impl AccountDataSource {
    pub fn new(client: UthoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSourceAdapter for AccountDataSource {
    const TYPE_NAME: &'static str = "utho_account";
    const KIND: &'static str = "account";
    type State = Account;

    async fn read(&self) -> Result<Account> {
        Ok(self.client.get_account().await?)
    }
}
