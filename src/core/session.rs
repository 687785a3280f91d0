use crate::core::query;
use crate::domain::model::{FruitCatalog, FruitRecord, SortKey};
use crate::domain::ports::FruitSource;
use chrono::{DateTime, Utc};

/// Load lifecycle of one session. `Loaded` and `Failed` are terminal;
/// there is no retry transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Owns the one-shot fetch and the in-memory catalog it produces.
///
/// The catalog starts empty, is replaced wholesale by a successful load and
/// stays empty on failure, so an empty-but-successful fetch remains
/// distinguishable from a failed one through [`CatalogSession::state`].
pub struct CatalogSession<S: FruitSource> {
    source: S,
    state: LoadState,
    catalog: FruitCatalog,
    loaded_at: Option<DateTime<Utc>>,
}

impl<S: FruitSource> CatalogSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: LoadState::Idle,
            catalog: FruitCatalog::default(),
            loaded_at: None,
        }
    }

    /// Runs the fetch once. Subsequent calls return the settled state
    /// without touching the network. A fetch failure is absorbed here and
    /// logged; no error reaches the caller.
    pub async fn load(&mut self) -> LoadState {
        if self.state != LoadState::Idle {
            return self.state;
        }
        self.state = LoadState::Loading;

        match self.source.fetch_all().await {
            Ok(catalog) => {
                tracing::debug!("Catalog loaded with {} records", catalog.len());
                self.catalog = catalog;
                self.loaded_at = Some(Utc::now());
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!("Catalog load failed: {}", e);
                self.state = LoadState::Failed;
            }
        }

        self.state
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn catalog(&self) -> &FruitCatalog {
        &self.catalog
    }

    /// When the current catalog finished loading, if it has.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// The filtered, ordered view over the owned catalog.
    pub fn view(&self, name_filter: &str, sort_key: SortKey) -> Vec<&FruitRecord> {
        query::view(&self.catalog, name_filter, sort_key)
    }
}
