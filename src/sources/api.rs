use crate::models::Property;
use crate::sources::traits::PropertySource;
use crate::sources::types::ListParams;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP record source backed by the listings API
pub struct ApiSource {
    client: Client,
    base_url: String,
}

impl ApiSource {
    /// Create a new API source with the given request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(client, base_url))
    }

    /// Use an already configured HTTP client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn properties_url(&self) -> String {
        format!("{}/properties", self.base_url)
    }

    fn property_url(&self, id: i64) -> String {
        format!("{}/properties/{}", self.base_url, id)
    }
}

#[async_trait]
impl PropertySource for ApiSource {
    async fn list(&self, params: ListParams) -> Result<Vec<Property>> {
        let url = self.properties_url();
        debug!("Fetching {} (skip={}, limit={})", url, params.skip, params.limit);

        let response = self
            .client
            .get(&url)
            .query(&[("skip", params.skip), ("limit", params.limit)])
            .send()
            .await
            .context("Failed to fetch properties")?;

        if !response.status().is_success() {
            warn!("Property API returned status: {}", response.status());
            anyhow::bail!("Failed to fetch properties: {}", response.status());
        }

        let mut properties: Vec<Property> = response
            .json()
            .await
            .context("Failed to parse property list")?;

        if properties.len() > params.limit {
            warn!(
                "API returned {} properties for a limit of {}, truncating",
                properties.len(),
                params.limit
            );
            properties.truncate(params.limit);
        }

        info!("Fetched {} properties", properties.len());
        Ok(properties)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = self.property_url(id);
        debug!("Deleting {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("Failed to delete property {}", id))?;

        if !response.status().is_success() {
            warn!("Property API returned status: {}", response.status());
            anyhow::bail!("Failed to delete property {}: {}", id, response.status());
        }

        info!("Deleted property {}", id);
        Ok(())
    }

    fn source_name(&self) -> &'static str {
        "API"
    }
}
