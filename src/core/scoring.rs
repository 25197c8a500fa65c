use crate::models::{Query, Service, ScoringWeights};
use crate::core::filters::{matches_age, matches_any_problem, matches_gender, matches_skin_type};

/// Calculate the match score of a service for a query
///
/// Scoring formula (default weights):
/// score = (
///     gender_match * 1.0 +     # service gender is the customer's or "any"
///     age_fit * 1.0 +          # customer age within [min_age, max_age]
///     skin_type_match * 1.0 +  # customer skin type listed by the service
///     problem_overlap * 1.0 +  # any customer problem treated
///     budget * 1.0 +           # constant: only affordable services are scored
///     base_score * 0.2         # curated quality, breaks ties
/// )
///
/// Callers must apply the budget filter first.
pub fn calculate_match_score(
    service: &Service,
    query: &Query,
    weights: &ScoringWeights,
) -> f64 {
    let mut score = 0.0;

    if matches_gender(service, query) {
        score += weights.gender;
    }

    if matches_age(service, query) {
        score += weights.age;
    }

    if matches_skin_type(service, query) {
        score += weights.skin_type;
    }

    if matches_any_problem(service, query) {
        score += weights.problem;
    }

    score += weights.budget;
    score += service.base_score * weights.base_score;

    score
}
