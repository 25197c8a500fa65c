// Service exports
pub mod catalog;
pub mod locations;

pub use catalog::{Catalog, CatalogError, CatalogStore, REQUIRED_COLUMNS, BASE_SCORE_COLUMN};
pub use locations::{PROVINCES, DEFAULT_PROVINCE, cities_for, cities_by_province};
