use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::normalize::{cell_to_int, normalize_list, to_float, to_int, to_lower_trimmed};

/// Gender token that matches every customer
pub const ANY_GENDER: &str = "any";

pub const DEFAULT_MIN_AGE: i64 = 0;
pub const DEFAULT_MAX_AGE: i64 = 200;

/// One catalog row as read from the source, before normalization
///
/// Every cell is optional; empty cells are read as absent.
#[derive(Debug, Clone, Default)]
pub struct RawServiceRow {
    pub name: Option<String>,
    pub skin_type: Option<String>,
    pub skin_problem: Option<String>,
    pub min_age: Option<String>,
    pub max_age: Option<String>,
    pub gender: Option<String>,
    pub price: Option<String>,
    pub base_score: Option<String>,
    pub notes: Option<String>,
}

/// A skincare service offered in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub name: String,
    pub skin_types: BTreeSet<String>,
    pub problems: BTreeSet<String>,
    pub min_age: i64,
    pub max_age: i64,
    pub gender: String,
    pub price: f64,
    pub base_score: f64,
    pub notes: String,
}

impl Service {
    /// Build a service from a raw row. Malformed cells fall back to defaults.
    pub fn from_row(row: &RawServiceRow) -> Self {
        Self {
            name: row.name.clone().unwrap_or_default(),
            skin_types: normalize_list(row.skin_type.as_deref()),
            problems: normalize_list(row.skin_problem.as_deref()),
            min_age: cell_to_int(row.min_age.as_deref(), DEFAULT_MIN_AGE),
            max_age: cell_to_int(row.max_age.as_deref(), DEFAULT_MAX_AGE),
            gender: gender_token(row.gender.as_deref()),
            price: to_float(row.price.as_deref(), 0.0),
            base_score: to_float(row.base_score.as_deref(), 0.0),
            notes: row.notes.clone().unwrap_or_default(),
        }
    }
}

/// Canonical search criteria for one customer
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub gender: String,
    pub age: i64,
    pub skin_type: String,
    pub problems: BTreeSet<String>,
    pub budget: f64,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            gender: ANY_GENDER.to_string(),
            age: 0,
            skin_type: String::new(),
            problems: BTreeSet::new(),
            budget: 0.0,
        }
    }
}

impl Query {
    /// Build a query from raw form values
    pub fn from_raw<S: AsRef<str>>(
        gender: Option<&str>,
        age: Option<&str>,
        skin_type: Option<&str>,
        problems: &[S],
        budget: Option<&str>,
    ) -> Self {
        Self {
            gender: gender_token(gender),
            age: to_int(age, 0),
            skin_type: to_lower_trimmed(skin_type),
            problems: problems
                .iter()
                .map(|p| to_lower_trimmed(Some(p.as_ref())))
                .filter(|p| !p.is_empty())
                .collect(),
            budget: to_float(budget, 0.0),
        }
    }
}

/// Lowercased gender token; absent, blank or `nan` cells mean "any"
fn gender_token(value: Option<&str>) -> String {
    let token = to_lower_trimmed(value);
    if token.is_empty() || token == "nan" {
        ANY_GENDER.to_string()
    } else {
        token
    }
}

/// Public projection of a ranked service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub name: String,
    pub price: f64,
    pub notes: String,
}

impl From<&Service> for ResultEntry {
    fn from(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            price: service.price,
            notes: service.notes.clone(),
        }
    }
}

/// Scoring weights
///
/// The defaults reproduce the catalog's reference formula: one point per
/// satisfied criterion, one point for fitting the budget, and a fifth of
/// the curated base score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub gender: f64,
    pub age: f64,
    pub skin_type: f64,
    pub problem: f64,
    pub budget: f64,
    pub base_score: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            gender: 1.0,
            age: 1.0,
            skin_type: 1.0,
            problem: 1.0,
            budget: 1.0,
            base_score: 0.2,
        }
    }
}
