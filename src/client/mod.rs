use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{Operation, OperationKind};
use crate::{Config, FeedlyError};

static FEEDLY_CLI_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
);

/// A blocking client for the Feedly cloud API. Each call is a single GET with no retries.
#[derive(Debug, Clone)]
pub struct FeedlyClient {
    base_url: String,
    http: Client,
}

impl FeedlyClient {
    pub fn new(cfg: &Config) -> Result<FeedlyClient> {
        let http = Client::builder()
            .user_agent(FEEDLY_CLI_USER_AGENT)
            .timeout(cfg.timeout())
            .build()
            .context("Could not build http client")?;

        Ok(FeedlyClient {
            base_url: cfg.base_url.to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search(&self, query: &str, count: u32, locale: Option<&str>) -> Result<Value, FeedlyError> {
        self.execute(&Operation::search(query, count, locale)?)
    }

    pub fn stream(&self, feed_id: &str, count: u32) -> Result<Value, FeedlyError> {
        self.execute(&Operation::stream(feed_id, count)?)
    }

    pub fn entry(&self, entry_id: &str) -> Result<Value, FeedlyError> {
        self.execute(&Operation::entry(entry_id)?)
    }

    pub fn execute(&self, op: &Operation) -> Result<Value, FeedlyError> {
        self.get_json(op.kind(), &op.request_url(&self.base_url))
    }

    /// GETs `url` and decodes the body as arbitrary JSON. Non-2xx responses fail without their
    /// body being read.
    pub fn get_json(&self, op: OperationKind, url: &str) -> Result<Value, FeedlyError> {
        debug!(%url, "fetching {}", op);

        let response = self.http.get(url).send()
            .map_err(|cause| {
                warn!(%url, error = %cause, "request failed");
                FeedlyError::Network { op, cause }
            })?;

        let status = response.status();
        debug!(%url, %status, "received response");
        if !status.is_success() {
            warn!(%url, %status, "non-success status");
            return Err(FeedlyError::HttpStatus { op, status, url: url.into() });
        }

        let body = response.text()
            .map_err(|cause| FeedlyError::Network { op, cause })?;

        serde_json::from_str(&body)
            .map_err(|cause| {
                warn!(%url, error = %cause, "response was not valid json");
                FeedlyError::Decode { op, cause }
            })
    }
}
