use url::Url;

use crate::error::Result;

/// Connection settings for a PowerDNS API endpoint.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub server_url: String, // e.g. "http://127.0.0.1:8081"
    pub api_key: String,
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Server root URL. Any path on the configured URL is dropped, since every
    /// endpoint is addressed from the server root.
    pub fn base_url(&self) -> Result<Url> {
        let mut url = Url::parse(self.server_url.trim())?;
        url.set_path("");
        Ok(url)
    }
}
