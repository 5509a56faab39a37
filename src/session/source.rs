use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::Deserialize;

use crate::config::BackendConfig;
use crate::models::{Credentials, StatId};
use crate::session::error::{InitError, StatFetchError, DEFAULT_INIT_FAILURE};

const CLIENT_AGENT: &str = concat!("fantasy-wrapped/", env!("CARGO_PKG_VERSION"));

/// The stats backend: one initialize call, then one payload per stat.
pub trait StatSource: Send + Sync {
    fn initialize(&self, credentials: &Credentials) -> Result<(), InitError>;
    fn fetch(&self, id: StatId) -> Result<String, StatFetchError>;
}

pub struct HttpStatSource {
    base_url: String,
    client: Client,
}

impl HttpStatSource {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl StatSource for HttpStatSource {
    fn initialize(&self, credentials: &Credentials) -> Result<(), InitError> {
        let resp = self
            .client
            .post(self.url("/initialize"))
            .header(USER_AGENT, CLIENT_AGENT)
            .json(credentials)
            .send()
            .map_err(|e| InitError::Request(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().unwrap_or_default();
        let detail = parse_detail(&body).unwrap_or_else(|| DEFAULT_INIT_FAILURE.to_string());
        Err(InitError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }

    fn fetch(&self, id: StatId) -> Result<String, StatFetchError> {
        let endpoint = id.endpoint();
        let request_error = |e: reqwest::Error| StatFetchError::Request {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        };

        let resp = self
            .client
            .get(self.url(endpoint))
            .header(USER_AGENT, CLIENT_AGENT)
            .send()
            .map_err(request_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StatFetchError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        resp.text().map_err(request_error)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Pulls the `detail` message out of an error response body.
///
/// String details come back as-is; structured ones (validation errors) as JSON text.
pub fn parse_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Null | serde_json::Value::String(_) => None,
        other => Some(other.to_string()),
    }
}
