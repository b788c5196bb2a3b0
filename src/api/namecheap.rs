use super::{DnsUpdateClient, UpdateResponse};
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;

pub struct NamecheapClient {
    client: reqwest::Client,
    endpoint: String,
    host: String,
    domain_name: String,
    ddns_password: String,
}

#[async_trait]
impl DnsUpdateClient for NamecheapClient {
    async fn send_update(&self) -> Result<UpdateResponse> {
        // The password travels in the query string, so strip the URL from errors.
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("host", self.host.as_str()),
                ("domain", self.domain_name.as_str()),
                ("password", self.ddns_password.as_str()),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("failed to read response body")?;

        Ok(UpdateResponse { status, body })
    }
}

impl NamecheapClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/update", config.provider_url.trim_end_matches('/')),
            host: config.host.clone(),
            domain_name: config.domain_name.clone(),
            ddns_password: config.ddns_password.clone(),
        })
    }
}
