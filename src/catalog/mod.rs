pub mod models;
pub mod store;

pub use models::CatalogItem;
pub use store::{load_items, CatalogError, CatalogSource, JsonFileCatalog};
