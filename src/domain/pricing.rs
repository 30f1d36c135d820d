// src/domain/pricing.rs

use crate::catalog::CatalogItem;
use serde::Serialize;

/// A catalog item with its price for the current request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub price: f64,
}

impl PricedItem {
    /// `None` when the price does not fit in an `f64`.
    pub fn new(item: CatalogItem, unit_price: f64) -> Option<Self> {
        let price = derive_price(item.popularity_score, item.weight, unit_price);
        if !price.is_finite() {
            tracing::warn!(name = %item.name, weight = item.weight, unit_price, "skipping unpriceable catalog item");
            return None;
        }
        Some(Self { item, price })
    }
}

/// Round to two decimals, halves away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Popular items carry a premium of up to 100% on top of their gold value.
pub fn derive_price(popularity_score: f64, weight: f64, unit_price: f64) -> f64 {
    round_cents((popularity_score + 1.0) * weight * unit_price)
}
