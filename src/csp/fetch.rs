use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_SECURITY_POLICY;
use tracing::debug;

use crate::csp::CspParser;

/// Something that can fetch a URL and report the domains its CSP names.
#[async_trait]
pub trait CspSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<String>>;
}

/// Fetches over HTTP with a pooled client.
pub struct HttpCspSource {
    client: Client,
    parser: CspParser,
}

impl HttpCspSource {
    pub fn new(client: Client) -> Result<Self> {
        Ok(Self {
            client,
            parser: CspParser::new()?,
        })
    }
}

#[async_trait]
impl CspSource for HttpCspSource {
    async fn fetch(&self, url: &str) -> Result<Vec<String>> {
        debug!("Checking CSP for {}", url);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("[{}] request failed", url))?;

        let headers = resp
            .headers()
            .get_all(CONTENT_SECURITY_POLICY)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect::<Vec<_>>();

        let body = resp
            .text()
            .await
            .with_context(|| format!("[{}] could not read response body", url))?;

        Ok(self
            .parser
            .extract_domains(headers.iter().map(String::as_str), &body))
    }
}
