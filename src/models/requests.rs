use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Query;

/// A raw form value; the form layer may send numbers or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl FormValue {
    pub fn as_text(&self) -> String {
        match self {
            FormValue::Text(text) => text.clone(),
            FormValue::Integer(value) => value.to_string(),
            FormValue::Float(value) => value.to_string(),
        }
    }
}

/// Request to recommend services for a customer
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(max = 200))]
    #[serde(default, alias = "customerName", rename = "customer_name")]
    pub customer_name: String,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub province: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub city: String,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<FormValue>,
    #[validate(length(max = 100))]
    #[serde(default, alias = "skinType", rename = "skin_type")]
    pub skin_type: Option<String>,
    #[validate(length(max = 32))]
    #[serde(default, alias = "skinProblems", rename = "skin_problems")]
    pub skin_problems: Vec<String>,
    #[serde(default)]
    pub budget: Option<FormValue>,
    #[validate(range(min = 1, max = 50))]
    #[serde(default)]
    pub limit: Option<usize>,
}

impl RecommendRequest {
    /// Normalize the raw form values into a search query
    pub fn to_query(&self) -> Query {
        let age = self.age.as_ref().map(FormValue::as_text);
        let budget = self.budget.as_ref().map(FormValue::as_text);

        Query::from_raw(
            self.gender.as_deref(),
            age.as_deref(),
            self.skin_type.as_deref(),
            self.skin_problems.as_slice(),
            budget.as_deref(),
        )
    }
}
