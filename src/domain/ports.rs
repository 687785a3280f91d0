use crate::domain::model::FruitCatalog;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where fruit records come from. This is the seam the presentation layer
/// and the tests substitute with doubles.
#[async_trait]
pub trait FruitSource: Send + Sync {
    /// Fetch the full record set. Exactly one attempt per invocation, no
    /// retries, records returned in the order the source delivers them.
    async fn fetch_all(&self) -> Result<FruitCatalog>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
}
