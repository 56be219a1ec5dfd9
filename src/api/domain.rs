//! DNS domain and record endpoints

use super::client::{segment, UthoClient};
use super::envelope::{first_or_not_found, Envelope};
use super::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub domain: String,
    pub nspoint: String,
    pub created_at: String,
    pub dnsrecord_count: String,
    pub records: Vec<Record>,
    #[serde(flatten)]
    pub envelope: Envelope,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Record {
    pub id: String,
    pub hostname: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub ttl: String,
    pub priority: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DnsDomains {
    domains: Vec<Domain>,
    #[serde(flatten)]
    envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRequest {
    pub domain: String,
}

/// New record payload. The API spells the weight field `wight`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsRecordRequest {
    pub domain: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub hostname: String,
    pub value: String,
    pub ttl: String,
    pub porttype: String,
    pub port: String,
    pub priority: String,
    #[serde(rename = "wight")]
    pub weight: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DnsRecordCreated {
    pub id: String,
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl UthoClient {
    pub async fn create_domain(&self, request: &DomainRequest) -> Result<Domain> {
        let domain: Domain = self.post("dns/adddomain", request).await?;
        domain.envelope.ensure_success()?;
        Ok(domain)
    }

    pub async fn get_domain(&self, name: &str) -> Result<Domain> {
        let reply: DnsDomains = self.get(&format!("dns/{}", segment(name))).await?;
        reply.envelope.ensure_not_failed()?;
        first_or_not_found(reply.domains, "domain")
    }

    pub async fn delete_domain(&self, name: &str) -> Result<()> {
        let reply: Envelope = self.delete(&format!("dns/{}/delete", segment(name))).await?;
        reply.ensure_success()
    }

    pub async fn create_dns_record(&self, request: &DnsRecordRequest) -> Result<DnsRecordCreated> {
        let path = format!("dns/{}/record/add", segment(&request.domain));
        let created: DnsRecordCreated = self.post(&path, request).await?;
        created.envelope.ensure_success()?;
        Ok(created)
    }

    pub async fn delete_dns_record(&self, domain: &str, record_id: &str) -> Result<()> {
        let path = format!(
            "dns/{}/record/{}/delete",
            segment(domain),
            segment(record_id)
        );
        let reply: Envelope = self.delete(&path).await?;
        reply.ensure_success()
    }
}
