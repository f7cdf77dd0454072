//! PowerDNS HTTP API client.

pub mod client;
pub mod normalize;
mod transport;
pub mod types;
pub mod version;
