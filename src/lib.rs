//! Async client for the PowerDNS HTTP API.
//!
//! The client detects on construction whether the server exposes the legacy
//! API or `/api/v1`, and presents zone contents as a flat [`Record`] list
//! either way.
//!
//! ```no_run
//! # async fn run() -> pdns_client::error::Result<()> {
//! use pdns_client::{PowerDnsClient, Record};
//!
//! let client = PowerDnsClient::new("http://127.0.0.1:8081", "secret").await?;
//! let id = client
//!     .create_record("example.org.", &Record::new("www.example.org.", "A", "192.0.2.1", 300))
//!     .await?;
//! assert!(client.record_exists_by_id("example.org.", &id).await?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod powerdns;
pub mod validation;

pub use config::ClientConfig;
pub use error::{PdnsError, Result};
pub use powerdns::client::PowerDnsClient;
pub use powerdns::types::{ChangeType, Record, ResourceRecordSet, ZoneInfo};
pub use powerdns::version::ApiVersion;
