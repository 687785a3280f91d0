pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::FruityviceClient;
pub use crate::core::query::view;
pub use crate::core::session::{CatalogSession, LoadState};
pub use crate::domain::model::{FruitCatalog, FruitRecord, Nutrition, SortKey};
pub use crate::domain::ports::{ConfigProvider, FruitSource};
pub use crate::utils::error::{CatalogError, Result};
