// catalog/store.rs
use crate::catalog::CatalogItem;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {msg}")]
    Io { path: String, msg: String },
    #[error("Catalog is not a JSON array of records: {0}")]
    Json(String),
}

/// Read-only source of raw catalog records, in storage order.
pub trait CatalogSource: Send + Sync {
    fn read_records(&self) -> Result<Vec<Value>, CatalogError>;
}

/// Catalog backed by a flat JSON file. Re-read on every call.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn read_records(&self) -> Result<Vec<Value>, CatalogError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| CatalogError::Io {
            path: self.path.display().to_string(),
            msg: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| CatalogError::Json(e.to_string()))
    }
}

/// Load and validate every record. Malformed records are logged and
/// skipped; the rest keep their storage order.
pub fn load_items(source: &dyn CatalogSource) -> Result<Vec<CatalogItem>, CatalogError> {
    let records = source.read_records()?;
    let total = records.len();

    let items: Vec<CatalogItem> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match CatalogItem::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed catalog record");
                None
            }
        })
        .collect();

    tracing::debug!(total, valid = items.len(), "catalog loaded");
    Ok(items)
}
