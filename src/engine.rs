// engine.rs
use crate::catalog::{load_items, CatalogError, CatalogSource};
use crate::domain::{Filter, PricedItem};
use crate::oracle::{OracleError, PriceOracle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Gold price unavailable: {0}")]
    OracleUnavailable(#[from] OracleError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Collaborators the engine is built from.
pub struct EngineConfig {
    pub catalog: Box<dyn CatalogSource>,
    pub oracle: Box<dyn PriceOracle>,
}

/// Prices the catalog against the live gold price and filters it.
///
/// Holds no per-request state; one instance is shared by every worker.
pub struct CatalogEngine {
    catalog: Box<dyn CatalogSource>,
    oracle: Box<dyn PriceOracle>,
}

impl CatalogEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            catalog: config.catalog,
            oracle: config.oracle,
        }
    }

    /// Every valid catalog item with its current price, optionally filtered.
    ///
    /// The gold price is fetched first; if it is unavailable nothing is
    /// returned.
    pub fn list_items(&self, filter: Option<&Filter>) -> Result<Vec<PricedItem>, EngineError> {
        let unit_price = self.oracle.fetch_unit_price()?;
        let items = load_items(self.catalog.as_ref())?;

        let priced: Vec<PricedItem> = items
            .into_iter()
            .filter_map(|item| PricedItem::new(item, unit_price))
            .collect();

        let result = match filter {
            Some(f) => f.apply(priced),
            None => priced,
        };

        tracing::debug!(unit_price, count = result.len(), ?filter, "items listed");
        Ok(result)
    }

    /// Case-insensitive lookup by name; the first match wins.
    ///
    /// The item is priced like in `list_items`. The oracle is only consulted
    /// once a record matched, so a miss never depends on it.
    pub fn get_item_by_name(&self, name: &str) -> Result<Option<PricedItem>, EngineError> {
        let wanted = name.to_lowercase();

        let found = load_items(self.catalog.as_ref())?
            .into_iter()
            .find(|item| item.name.to_lowercase() == wanted);

        let Some(item) = found else {
            tracing::debug!(name, "item not found");
            return Ok(None);
        };

        let unit_price = self.oracle.fetch_unit_price()?;
        Ok(PricedItem::new(item, unit_price))
    }
}
