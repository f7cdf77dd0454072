use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Request, Response};
use tracing::debug;
use url::Url;

use super::version::ApiVersion;
use crate::config::ClientConfig;
use crate::error::Result;

/// Builds and sends requests against a single PowerDNS server.
#[derive(Clone, Debug)]
pub(crate) struct Transport {
    http: Client,
    base_url: Url,
    api_key: HeaderValue,
}

impl Transport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key)?;
        api_key.set_sensitive(true);

        Ok(Self {
            http: Client::new(),
            base_url: config.base_url()?,
            api_key,
        })
    }

    fn url(&self, version: ApiVersion, endpoint: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!(
            "{}/{}",
            version.path_prefix(),
            endpoint.trim_start_matches('/')
        ));
        url
    }

    fn headers(&self, method: &Method) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("X-API-Key", self.api_key.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if *method != Method::GET {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        headers
    }

    /// Prepare a request for `endpoint`, prefixed according to `version`.
    pub fn build_request(
        &self,
        version: ApiVersion,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request> {
        let url = self.url(version, endpoint);
        let headers = self.headers(&method);

        let mut req = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            req = req.body(body);
        }
        Ok(req.build()?)
    }

    pub async fn execute(&self, req: Request) -> Result<Response> {
        debug!(method = %req.method(), url = %req.url(), "sending PowerDNS request");
        Ok(self.http.execute(req).await?)
    }
}
