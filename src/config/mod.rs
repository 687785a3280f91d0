use crate::domain::model::SortKey;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fruit-catalog")]
#[command(about = "Fetch, search and sort fruit nutrition data")]
pub struct CliConfig {
    #[arg(long, default_value = "https://www.fruityvice.com/api/fruit/all")]
    pub api_endpoint: String,

    /// Case-insensitive substring to match against fruit names.
    #[arg(long, default_value = "")]
    pub filter: String,

    /// Nutrition field the listing is ordered by, highest value first.
    #[arg(long, value_enum, default_value_t = SortKey::Calories)]
    pub sort_by: SortKey,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)
    }
}
