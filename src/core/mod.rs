pub mod query;
pub mod session;

pub use crate::domain::model::{FruitCatalog, FruitRecord, Nutrition, SortKey};
pub use crate::domain::ports::{ConfigProvider, FruitSource};
pub use crate::utils::error::Result;
