use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::domain::ResultEntry;

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub customer_name: String,
    pub province: String,
    pub city: String,
    pub results: Vec<ResultEntry>,
    pub total_services: usize,
    pub eligible_services: usize,
    pub error: Option<String>,
}

impl RecommendResponse {
    /// Empty response carrying a user-visible error message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            customer_name: String::new(),
            province: String::new(),
            city: String::new(),
            results: Vec::new(),
            total_services: 0,
            eligible_services: 0,
            error: Some(message.into()),
        }
    }
}

/// Dropdown options for the customer form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub genders: Vec<String>,
    pub skin_types: Vec<String>,
    pub skin_problems: Vec<String>,
    pub provinces: Vec<String>,
    pub default_province: String,
    pub cities_by_province: BTreeMap<String, Vec<String>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Catalog reload response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub success: bool,
    pub services: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
