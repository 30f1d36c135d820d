use serde::{Deserialize, Serialize};
use thiserror::Error;

// record
//  ├── name             (non-empty string)
//  ├── popularityScore  (0.0 ..= 1.0)
//  ├── weight           (grams, > 0)
//  └── images
//       ├── yellow
//       ├── rose
//       └── white

/// A record as it sits in the catalog file. Everything optional so that a
/// bad record surfaces as a validation error instead of a parse failure of
/// the whole file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalogRecord {
    pub name: Option<String>,
    pub popularity_score: Option<f64>,
    pub weight: Option<f64>,
    pub images: Option<RawImages>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawImages {
    pub yellow: Option<String>,
    pub rose: Option<String>,
    pub white: Option<String>,
}

/// Image locators per metal variant. Empty strings are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Images {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yellow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white: Option<String>,
}

/// A validated catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub name: String,
    pub popularity_score: f64,
    pub weight: f64,
    pub images: Images,
}

/// Why a single record was rejected.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("record is not a catalog object: {0}")]
    Shape(String),
    #[error("missing or empty name")]
    MissingName,
    #[error("missing popularityScore")]
    MissingPopularity,
    #[error("popularityScore {0} is outside 0..=1")]
    PopularityOutOfRange(f64),
    #[error("missing weight")]
    MissingWeight,
    #[error("weight {0} must be a positive number")]
    InvalidWeight(f64),
}

impl CatalogItem {
    /// Parse and validate one raw JSON record.
    pub fn from_value(value: serde_json::Value) -> Result<Self, RecordError> {
        let raw: RawCatalogRecord =
            serde_json::from_value(value).map_err(|e| RecordError::Shape(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawCatalogRecord) -> Result<Self, RecordError> {
        let name = raw
            .name
            .filter(|s| !s.trim().is_empty())
            .ok_or(RecordError::MissingName)?;

        let popularity_score = raw.popularity_score.ok_or(RecordError::MissingPopularity)?;
        if !(0.0..=1.0).contains(&popularity_score) {
            return Err(RecordError::PopularityOutOfRange(popularity_score));
        }

        let weight = raw.weight.ok_or(RecordError::MissingWeight)?;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(RecordError::InvalidWeight(weight));
        }

        let non_empty = |s: Option<String>| s.filter(|s| !s.trim().is_empty());
        let images = raw.images.unwrap_or_default();

        Ok(CatalogItem {
            name,
            popularity_score,
            weight,
            images: Images {
                yellow: non_empty(images.yellow),
                rose: non_empty(images.rose),
                white: non_empty(images.white),
            },
        })
    }
}
