pub mod filter;
pub mod pricing;

pub use filter::Filter;
pub use pricing::PricedItem;
