// src/domain/filter.rs

use crate::domain::PricedItem;

/// Optional inclusive bounds on price and popularity. Each bound is checked
/// on its own; an absent bound never rejects anything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Filter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_popularity: Option<f64>,
    pub max_popularity: Option<f64>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_popularity.is_none()
            && self.max_popularity.is_none()
    }

    pub fn matches(&self, priced: &PricedItem) -> bool {
        let popularity = priced.item.popularity_score;

        self.min_price.map_or(true, |min| priced.price >= min)
            && self.max_price.map_or(true, |max| priced.price <= max)
            && self.min_popularity.map_or(true, |min| popularity >= min)
            && self.max_popularity.map_or(true, |max| popularity <= max)
    }

    /// Keep matching items, preserving their order.
    pub fn apply(&self, items: Vec<PricedItem>) -> Vec<PricedItem> {
        if self.is_empty() {
            return items;
        }
        items.into_iter().filter(|p| self.matches(p)).collect()
    }
}
