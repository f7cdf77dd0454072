use reqwest::{Method, StatusCode};
use tracing::info;

use super::transport::Transport;
use crate::error::Result;

/// API generation spoken by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    /// Pre-4.0 API: un-prefixed paths, flat `records` in zone documents.
    Legacy,
    /// `/api/v1`: zone documents carry `rrsets`.
    V1,
}

impl ApiVersion {
    pub fn path_prefix(self) -> &'static str {
        match self {
            ApiVersion::Legacy => "",
            ApiVersion::V1 => "/api/v1",
        }
    }

    /// Probe `GET /api/v1/servers`; only a 200 means the server speaks v1.
    pub(crate) async fn detect(transport: &Transport) -> Result<Self> {
        let req = transport.build_request(ApiVersion::Legacy, Method::GET, "/api/v1/servers", None)?;
        let res = transport.execute(req).await?;

        let version = if res.status() == StatusCode::OK {
            ApiVersion::V1
        } else {
            ApiVersion::Legacy
        };
        info!(status = %res.status(), ?version, "detected PowerDNS API version");
        Ok(version)
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiVersion::Legacy => f.write_str("legacy"),
            ApiVersion::V1 => f.write_str("v1"),
        }
    }
}
