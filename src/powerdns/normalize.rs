//! Reconciles the legacy and `/api/v1` zone document shapes.
//!
//! Legacy servers list every record flat under `records`; v1 servers group them
//! into `rrsets` whose members only carry content. Callers that want a flat view
//! use [`flatten_records`], callers that need set semantics use [`record_sets`].

use super::types::{Record, ResourceRecordSet, ZoneInfo};

/// Flat record view of a zone.
///
/// Legacy records come first, followed by the members of every record set in
/// server order. Each member inherits name, type and TTL from its set.
pub fn flatten_records(zone: ZoneInfo) -> Vec<Record> {
    let mut records = zone.records;
    for rrset in zone.rrsets {
        records.extend(rrset.records.into_iter().map(|rec| Record {
            name: rrset.name.clone(),
            rtype: rrset.rtype.clone(),
            content: rec.content,
            ttl: rrset.ttl,
            disabled: rec.disabled,
        }));
    }
    records
}

/// Record sets exactly as the server listed them; empty for legacy zones.
pub fn record_sets(zone: ZoneInfo) -> Vec<ResourceRecordSet> {
    zone.rrsets
}

/// Records whose name and type match exactly. Case is significant.
pub fn filter_by_name_and_type(records: Vec<Record>, name: &str, rtype: &str) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| r.name == name && r.rtype == rtype)
        .collect()
}
