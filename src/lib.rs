//! Glowmatch - skincare service matching engine
//!
//! This library ranks a catalog of skincare services against a customer's
//! profile. It implements a filter, score, sort and truncate pipeline over an
//! immutable catalog snapshot, plus the HTTP surface around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{rank, Ranker, RankResult, DEFAULT_TOP_K};
pub use models::{Query, Service, ResultEntry, ScoringWeights, RecommendRequest, RecommendResponse};
pub use services::{Catalog, CatalogError, CatalogStore};
