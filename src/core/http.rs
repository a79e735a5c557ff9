//! HTTP utilities for NHL API communication

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::core::config::ClientConfig;
use crate::error::{NhlError, Result};


/// Query parameters as sent on the wire, in order.
pub type Query = Vec<(&'static str, String)>;

/// Headers sent with every request.
pub fn default_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Shared connection pool plus the API root every path is joined onto.
#[derive(Debug)]
pub struct Handle {
    pub web: Client,
    base_url: String,
}

impl Handle {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let web = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(default_header_map())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            web,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a resource path such as `teams/1`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` (relative to the API root) and decode the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        self.fetch_json(&self.url(path), params).await
    }

    /// GET an absolute `url` with `params` and decode the body as `T`.
    ///
    /// Any non-2xx status becomes [`NhlError::Upstream`]; the body is only
    /// decoded on success.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str, params: &[(&str, String)]) -> Result<T> {
        let request = self.web.get(url).query(params).build()?;
        let full_url = request.url().to_string();

        debug!(url = %full_url, "GET");
        let res = self.web.execute(request).await?;
        let status = res.status();

        if !status.is_success() {
            warn!(url = %full_url, %status, "NHL API returned non-success status");
            return Err(NhlError::Upstream {
                status,
                url: full_url,
            });
        }

        debug!(url = %full_url, %status, "response received");
        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
