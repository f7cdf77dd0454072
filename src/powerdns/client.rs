use crate::config::ClientConfig;
use crate::error::{Action, PdnsError, Result};
use crate::powerdns::normalize::{filter_by_name_and_type, flatten_records, record_sets};
use crate::powerdns::transport::Transport;
use crate::powerdns::types::*;
use crate::powerdns::version::ApiVersion;
use crate::validation::{parse_record_id, record_id};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

/// The only server instance the API addresses.
pub const SERVER_ID: &str = "localhost";

#[derive(Clone, Debug)]
pub struct PowerDnsClient {
    transport: Transport,
    version: ApiVersion,
}

impl PowerDnsClient {
    /// Connect to `server_url`, detecting which API generation it speaks.
    ///
    /// Fails if the URL is malformed or the server cannot be reached.
    pub async fn new(server_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(server_url, api_key)).await
    }

    pub async fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = Transport::new(config)?;
        let version = ApiVersion::detect(&transport).await?;
        Ok(Self { transport, version })
    }

    pub fn api_version(&self) -> ApiVersion {
        self.version
    }

    fn zones_path() -> String {
        format!("/servers/{SERVER_ID}/zones")
    }

    fn zone_path(zone: &str) -> String {
        format!("/servers/{SERVER_ID}/zones/{zone}")
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let req = self
            .transport
            .build_request(self.version, Method::GET, endpoint, None)?;
        let res = self.transport.execute(req).await?;
        let status = res.status();
        let body = res.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| PdnsError::Decode { status, source })
    }

    /// Returns all zones of the server, without their records.
    pub async fn list_zones(&self) -> Result<Vec<ZoneInfo>> {
        self.get_json(&Self::zones_path()).await
    }

    /// Returns the full zone document, records included.
    pub async fn get_zone(&self, zone: &str) -> Result<ZoneInfo> {
        self.get_json(&Self::zone_path(zone)).await
    }

    /// All records of `zone` as a flat list, whichever API generation the server speaks.
    pub async fn list_records(&self, zone: &str) -> Result<Vec<Record>> {
        Ok(flatten_records(self.get_zone(zone).await?))
    }

    /// Record sets of `zone` as listed by the server. Legacy servers have none.
    pub async fn list_records_as_rrset(&self, zone: &str) -> Result<Vec<ResourceRecordSet>> {
        Ok(record_sets(self.get_zone(zone).await?))
    }

    pub async fn list_records_by_name_and_type(
        &self,
        zone: &str,
        name: &str,
        rtype: &str,
    ) -> Result<Vec<Record>> {
        let records = self.list_records(zone).await?;
        Ok(filter_by_name_and_type(records, name, rtype))
    }

    pub async fn list_records_by_id(&self, zone: &str, id: &str) -> Result<Vec<Record>> {
        let (name, rtype) = parse_record_id(id)?;
        self.list_records_by_name_and_type(zone, name, rtype).await
    }

    pub async fn record_exists(&self, zone: &str, name: &str, rtype: &str) -> Result<bool> {
        let records = self.list_records(zone).await?;
        Ok(records.iter().any(|r| r.name == name && r.rtype == rtype))
    }

    pub async fn record_exists_by_id(&self, zone: &str, id: &str) -> Result<bool> {
        let (name, rtype) = parse_record_id(id)?;
        self.record_exists(zone, name, rtype).await
    }

    /// Store `record` as the only record at its name and type.
    ///
    /// Any other records already present in that set are replaced, not kept.
    /// Returns the record identifier.
    pub async fn create_record(&self, zone: &str, record: &Record) -> Result<String> {
        let rrset = ResourceRecordSet::replacing_with(record);
        self.patch_rrsets(zone, &[rrset], Action::CreateRecord, record.id())
            .await?;
        Ok(record.id())
    }

    /// Replace the whole set at the name and type of `rr_set`. The change type
    /// is always sent as `REPLACE`.
    pub async fn replace_record_set(&self, zone: &str, mut rr_set: ResourceRecordSet) -> Result<String> {
        rr_set.changetype = Some(ChangeType::Replace);
        let id = rr_set.id();
        self.patch_rrsets(zone, std::slice::from_ref(&rr_set), Action::ReplaceRecordSet, id.clone())
            .await?;
        Ok(id)
    }

    pub async fn delete_record_set(&self, zone: &str, name: &str, rtype: &str) -> Result<()> {
        let rrset = ResourceRecordSet::deletion(name, rtype);
        self.patch_rrsets(zone, &[rrset], Action::DeleteRecordSet, record_id(name, rtype))
            .await
    }

    pub async fn delete_record_set_by_id(&self, zone: &str, id: &str) -> Result<()> {
        let (name, rtype) = parse_record_id(id)?;
        self.delete_record_set(zone, name, rtype).await
    }

    async fn patch_rrsets(
        &self,
        zone: &str,
        rrsets: &[ResourceRecordSet],
        action: Action,
        id: String,
    ) -> Result<()> {
        let body = serde_json::to_vec(&ZonePatchRequest { rrsets }).map_err(PdnsError::Encode)?;

        let req = self.transport.build_request(
            self.version,
            Method::PATCH,
            &Self::zone_path(zone),
            Some(body),
        )?;
        let res = self.transport.execute(req).await?;
        let status = res.status();
        if status == StatusCode::OK || status == StatusCode::NO_CONTENT {
            return Ok(());
        }

        let body = res.bytes().await.unwrap_or_default();
        let err = PdnsError::api(action, id, status, &body);
        warn!(zone, %status, error = %err, "PowerDNS rejected zone update");
        Err(err)
    }
}
