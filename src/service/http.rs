//! HTTP implementation of the sketch services.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{SketchService, TransportError};
use crate::deletion::{DeletionRequest, SKETCHLIST_PARAM};

/// Where the sketch server lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the device, e.g. `http://192.168.4.1`.
    pub url: String,
    /// Path of the listing endpoint.
    pub list_path: String,
    /// Path of the deletion endpoint.
    pub delete_path: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: "http://192.168.4.1".to_string(),
            list_path: "getList.html".to_string(),
            delete_path: "delete.html".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// Full URL of `path` on this server.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Blocking HTTP client for the listing and deletion endpoints.
pub struct HttpService {
    agent: ureq::Agent,
    config: ServerConfig,
}

impl HttpService {
    pub fn new(config: ServerConfig) -> Result<Self, TransportError> {
        if !(config.url.starts_with("http://") || config.url.starts_with("https://")) {
            return Err(TransportError::InvalidUrl {
                url: config.url.clone(),
                message: "expected an http:// or https:// URL".to_string(),
            });
        }
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build();
        Ok(Self { agent, config })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    fn get(&self, request: ureq::Request, url: &str) -> Result<ureq::Response, TransportError> {
        tracing::debug!(url, "GET");
        request.call().map_err(|e| match e {
            ureq::Error::Status(status, _) => TransportError::Status {
                url: url.to_string(),
                status,
            },
            ureq::Error::Transport(transport) => TransportError::Request {
                url: url.to_string(),
                message: transport.to_string(),
            },
        })
    }
}

impl SketchService for HttpService {
    fn fetch_listing(&self) -> Result<String, TransportError> {
        let url = self.config.endpoint(&self.config.list_path);
        let response = self.get(self.agent.get(&url), &url)?;
        let body = response.into_string().map_err(|e| TransportError::Body {
            url: url.clone(),
            message: e.to_string(),
        })?;
        tracing::info!(url = %url, bytes = body.len(), "fetched sketch listing");
        Ok(body)
    }

    fn delete(&self, request: &DeletionRequest) -> Result<(), TransportError> {
        let url = self.config.endpoint(&self.config.delete_path);
        let sketchlist = request.sketchlist();
        let full_url = format!(
            "{}?{}={}",
            url,
            SKETCHLIST_PARAM,
            encode_query_value(&sketchlist)
        );
        self.get(self.agent.get(&full_url), &full_url)?;
        tracing::info!(url = %url, count = request.len(), "requested deletion of {}", sketchlist);
        Ok(())
    }
}

/// Percent-encode a query value, leaving unreserved characters and the
/// `,` separator as they are. The device splits the raw value on `,`.
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b',' => {
                out.push(char::from(byte))
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
