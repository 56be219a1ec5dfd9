//! `utho_dns_record`

use super::adapter::{AdapterError, ResourceAdapter, Result};
use crate::api::domain::{DnsRecordCreated, DnsRecordRequest, Record};
use crate::api::envelope::last_match_or_not_found;
use crate::api::UthoClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsRecordState {
    pub id: String,
    pub domain: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub hostname: String,
    pub value: String,
    pub ttl: String,
    pub porttype: String,
    pub port: String,
    pub priority: String,
    pub weight: String,
}

/// Strip every occurrence of the zone name from a record hostname, then one
/// trailing dot: `www.example.com` in `example.com` becomes `www.`, then
/// `www`.
pub fn relative_hostname(hostname: &str, domain: &str) -> String {
    let stripped = if domain.is_empty() {
        hostname.to_string()
    } else {
        hostname.replace(domain, "")
    };
    match stripped.strip_suffix('.') {
        Some(rest) => rest.to_string(),
        None => stripped,
    }
}

pub struct DnsRecordResource {
    client: UthoClient,
}

impl DnsRecordResource {
    pub fn new(client: UthoClient) -> Self {
        Self { client }
    }

    async fn find_record(&self, domain: &str, id: &str) -> Result<Record> {
        let zone = self.client.get_domain(domain).await?;
        Ok(last_match_or_not_found(zone.records, "dns record", |r| {
            r.id == id
        })?)
    }
}

#[async_trait]
impl ResourceAdapter for DnsRecordResource {
    const TYPE_NAME: &'static str = "utho_dns_record";
    const KIND: &'static str = "dns record";
    type State = DnsRecordState;
    type Created = DnsRecordCreated;

    async fn submit(&self, plan: &DnsRecordState) -> Result<DnsRecordCreated> {
        let request = DnsRecordRequest {
            domain: plan.domain.clone(),
            kind: plan.kind.clone(),
            hostname: plan.hostname.clone(),
            value: plan.value.clone(),
            ttl: plan.ttl.clone(),
            porttype: plan.porttype.clone(),
            port: plan.port.clone(),
            priority: plan.priority.clone(),
            weight: plan.weight.clone(),
        };
        Ok(self.client.create_dns_record(&request).await?)
    }

    async fn settle(&self, plan: DnsRecordState, created: DnsRecordCreated) -> Result<DnsRecordState> {
        let hostname = relative_hostname(&plan.hostname, &plan.domain);
        Ok(DnsRecordState {
            id: created.id,
            hostname,
            ..plan
        })
    }

    /// Records are only listed through their zone; port, port type and
    /// weight are never echoed and come from prior state.
    async fn read(&self, prior: DnsRecordState) -> Result<DnsRecordState> {
        let record = self.find_record(&prior.domain, &prior.id).await?;
        Ok(DnsRecordState {
            id: record.id,
            hostname: relative_hostname(&record.hostname, &prior.domain),
            kind: record.kind,
            value: record.value,
            ttl: record.ttl,
            priority: record.priority,
            ..prior
        })
    }

    async fn delete(&self, state: &DnsRecordState) -> Result<()> {
        Ok(self
            .client
            .delete_dns_record(&state.domain, &state.id)
            .await?)
    }

    /// Import ids take the form `<domain>/<record id>`.
    fn import_state(&self, id: &str) -> Result<DnsRecordState> {
        match id.split_once('/') {
            Some((domain, record)) if !domain.is_empty() && !record.is_empty() => {
                Ok(DnsRecordState {
                    id: record.to_string(),
                    domain: domain.to_string(),
                    ..DnsRecordState::default()
                })
            }
            _ => Err(AdapterError::InvalidImportId {
                kind: Self::KIND,
                id: id.to_string(),
            }),
        }
    }
}
