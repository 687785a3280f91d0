use crate::domain::model::{FruitCatalog, FruitRecord};
use crate::domain::ports::{ConfigProvider, FruitSource};
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// [`FruitSource`] backed by the Fruityvice HTTP API.
///
/// The reqwest client is injected at construction; `with_default_client`
/// builds one for callers that don't need to share a client.
pub struct FruityviceClient<C: ConfigProvider> {
    client: Client,
    config: C,
}

impl<C: ConfigProvider> FruityviceClient<C> {
    pub fn new(client: Client, config: C) -> Self {
        Self { client, config }
    }

    pub fn with_default_client(config: C) -> Self {
        Self::new(Client::new(), config)
    }
}

#[async_trait]
impl<C: ConfigProvider> FruitSource for FruityviceClient<C> {
    async fn fetch_all(&self) -> Result<FruitCatalog> {
        let endpoint = self.config.api_endpoint();
        tracing::debug!("Making API request to: {}", endpoint);

        let response = self.client.get(endpoint).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CatalogError::StatusError {
                status: response.status(),
            });
        }

        let body = response.text().await?;
        let records: Vec<FruitRecord> = serde_json::from_str(&body)?;

        tracing::debug!("Fetched {} fruit records", records.len());
        Ok(FruitCatalog::new(records))
    }
}
