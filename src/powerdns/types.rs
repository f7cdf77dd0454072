use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::record_id;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneInfo {
    #[serde(alias = "ID", default)]
    pub id: String, // "example.com."
    pub name: String, // "example.com."
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub url: String, // "/api/v1/servers/localhost/zones/example.com."
    #[serde(default)]
    pub last_check: i64,
    #[serde(default)]
    pub kind: String, // "Native", "Master", "Slave"
    #[serde(alias = "dnsssec", default)]
    pub dnssec: bool,
    #[serde(default)]
    pub serial: i64,
    #[serde(default)]
    pub notified_serial: i64,
    #[serde(default)]
    pub masters: Vec<String>,
    /// Flat record list, only sent by legacy servers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<Record>,
    /// Record sets, only sent by `/api/v1` servers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rrsets: Vec<ResourceRecordSet>,
}

impl ZoneInfo {
    /// Time of the last slave check, `None` if the zone was never checked.
    pub fn last_checked(&self) -> Option<DateTime<Utc>> {
        if self.last_check <= 0 {
            return None;
        }
        DateTime::from_timestamp(self.last_check, 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub name: String, // "www.example.com."
    #[serde(rename = "type")]
    pub rtype: String, // "A", "CNAME", ...
    pub content: String, // "192.0.2.1" or "ns1.example.net."
    pub ttl: u32,
    pub disabled: bool,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        rtype: impl Into<String>,
        content: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            rtype: rtype.into(),
            content: content.into(),
            ttl,
            disabled: false,
        }
    }

    pub fn id(&self) -> String {
        record_id(&self.name, &self.rtype)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    Replace,
    Delete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecordSet {
    pub name: String,
    #[serde(rename = "type")]
    pub rtype: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changetype: Option<ChangeType>, // only set when patching
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<Record>,
}

impl ResourceRecordSet {
    pub fn new(name: impl Into<String>, rtype: impl Into<String>, ttl: u32) -> Self {
        Self {
            name: name.into(),
            rtype: rtype.into(),
            ttl,
            ..Default::default()
        }
    }

    /// Set holding exactly `record`, replacing whatever is stored at its name and type.
    pub(crate) fn replacing_with(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            rtype: record.rtype.clone(),
            ttl: record.ttl,
            changetype: Some(ChangeType::Replace),
            records: vec![record.clone()],
        }
    }

    pub(crate) fn deletion(name: &str, rtype: &str) -> Self {
        Self {
            name: name.to_string(),
            rtype: rtype.to_string(),
            ttl: 0,
            changetype: Some(ChangeType::Delete),
            records: Vec::new(),
        }
    }

    /// Append a member record carrying the set's name, type and TTL.
    pub fn with_record(mut self, content: impl Into<String>) -> Self {
        let record = Record::new(self.name.clone(), self.rtype.clone(), content, self.ttl);
        self.records.push(record);
        self
    }

    pub fn id(&self) -> String {
        record_id(&self.name, &self.rtype)
    }
}

// Body of a zone PATCH request
#[derive(Debug, Serialize)]
pub(crate) struct ZonePatchRequest<'a> {
    pub rrsets: &'a [ResourceRecordSet],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_v1_zone() {
        let zone: ZoneInfo = serde_json::from_value(json!({
            "id": "example.org.",
            "name": "example.org.",
            "kind": "Native",
            "dnssec": true,
            "serial": 2024010101,
            "masters": [],
            "rrsets": [{
                "name": "www.example.org.",
                "type": "A",
                "ttl": 300,
                "records": [{"content": "192.0.2.1", "disabled": false}],
                "comments": []
            }]
        }))
        .unwrap();

        assert!(zone.dnssec);
        assert!(zone.records.is_empty());
        assert_eq!(zone.rrsets.len(), 1);
        assert_eq!(zone.rrsets[0].changetype, None);
        assert_eq!(zone.rrsets[0].records[0].content, "192.0.2.1");
        assert_eq!(zone.rrsets[0].records[0].name, "");
    }

    #[test]
    fn decodes_legacy_zone_keys() {
        let zone: ZoneInfo = serde_json::from_value(json!({
            "ID": "example.org.",
            "name": "example.org.",
            "dnsssec": true,
            "records": [{
                "name": "example.org.",
                "type": "SOA",
                "content": "ns1.example.org. hostmaster.example.org. 1 10800 3600 604800 3600",
                "ttl": 3600,
                "disabled": false
            }]
        }))
        .unwrap();

        assert_eq!(zone.id, "example.org.");
        assert!(zone.dnssec);
        assert_eq!(zone.records[0].rtype, "SOA");
        assert!(zone.rrsets.is_empty());
    }

    #[test]
    fn deletion_omits_records() {
        let rrset = ResourceRecordSet::deletion("www.example.org.", "A");
        let value = serde_json::to_value(&rrset).unwrap();
        assert_eq!(value["changetype"], "DELETE");
        assert!(value.get("records").is_none());
    }

    #[test]
    fn replacing_with_wraps_single_record() {
        let record = Record::new("www.example.org.", "A", "192.0.2.7", 120);
        let rrset = ResourceRecordSet::replacing_with(&record);
        assert_eq!(rrset.changetype, Some(ChangeType::Replace));
        assert_eq!(rrset.ttl, 120);
        assert_eq!(rrset.records, vec![record.clone()]);
        assert_eq!(rrset.id(), record.id());
    }

    #[test]
    fn last_checked_treats_zero_as_never() {
        let mut zone = ZoneInfo::default();
        assert_eq!(zone.last_checked(), None);
        zone.last_check = 1_700_000_000;
        assert_eq!(zone.last_checked().unwrap().timestamp(), 1_700_000_000);
    }
}
