use crate::core::{filters::within_budget, scoring::calculate_match_score};
use crate::models::{Query, ResultEntry, ScoringWeights, Service};

/// Default number of services returned per query
pub const DEFAULT_TOP_K: usize = 5;

/// Result of the ranking process
#[derive(Debug, Clone, PartialEq)]
pub struct RankResult {
    pub results: Vec<ResultEntry>,
    pub total_services: usize,
    pub eligible_services: usize,
}

/// A service paired with its score; never leaves the ranker
#[derive(Debug)]
struct ScoredCandidate<'a> {
    service: &'a Service,
    score: f64,
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Hard budget filter
/// 2. Scoring
/// 3. Stable sort by descending score (ties keep catalog order)
/// 4. Truncation to the top K
/// 5. Projection to public result entries
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
    top_k: usize,
}

impl Ranker {
    pub fn new(weights: ScoringWeights, top_k: usize) -> Self {
        Self { weights, top_k }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_TOP_K)
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Rank the catalog for a query using the configured top K
    pub fn rank(&self, query: &Query, services: &[Service]) -> RankResult {
        self.rank_top(query, services, self.top_k)
    }

    /// Rank the catalog for a query, keeping at most `top_k` results
    ///
    /// # Arguments
    /// * `query` - The customer's normalized criteria
    /// * `services` - The catalog, in catalog order
    /// * `top_k` - Maximum number of results to return
    pub fn rank_top(&self, query: &Query, services: &[Service], top_k: usize) -> RankResult {
        let mut candidates: Vec<ScoredCandidate<'_>> = services
            .iter()
            // Stage 1: Hard budget filter
            .filter(|service| within_budget(service, query))
            // Stage 2: Scoring
            .map(|service| ScoredCandidate {
                service,
                score: calculate_match_score(service, query, &self.weights),
            })
            .collect();

        let eligible_services = candidates.len();

        // Stage 3: sort_by is stable, equal scores keep catalog order
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

        // Stage 4 & 5: Truncate and project
        let results = candidates
            .into_iter()
            .take(top_k)
            .map(|candidate| ResultEntry::from(candidate.service))
            .collect();

        RankResult {
            results,
            total_services: services.len(),
            eligible_services,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank services for a query with the default weights
pub fn rank(query: &Query, services: &[Service], top_k: usize) -> Vec<ResultEntry> {
    Ranker::with_default_weights()
        .rank_top(query, services, top_k)
        .results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn tokens(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn create_service(name: &str, price: f64, base_score: f64) -> Service {
        Service {
            name: name.to_string(),
            skin_types: tokens(&["oily"]),
            problems: tokens(&["acne"]),
            min_age: 18,
            max_age: 60,
            gender: "any".to_string(),
            price,
            base_score,
            notes: format!("{} notes", name),
        }
    }

    fn create_query(budget: f64) -> Query {
        Query {
            gender: "female".to_string(),
            age: 25,
            skin_type: "oily".to_string(),
            problems: tokens(&["acne"]),
            budget,
        }
    }

    #[test]
    fn test_rank_basic() {
        let ranker = Ranker::with_default_weights();
        let services = vec![
            create_service("Facial A", 500.0, 5.0),
            create_service("Peel B", 1500.0, 9.0), // Over budget
        ];

        let result = ranker.rank(&create_query(1000.0), &services);

        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].name, "Facial A");
        assert_eq!(result.total_services, 2);
        assert_eq!(result.eligible_services, 1);
    }

    #[test]
    fn test_sorted_by_score() {
        let ranker = Ranker::with_default_weights();
        let mut weak = create_service("Weak", 100.0, 0.0);
        weak.skin_types = tokens(&["dry"]);
        let services = vec![weak, create_service("Strong", 100.0, 0.0)];

        let result = ranker.rank(&create_query(1000.0), &services);

        assert_eq!(result.results[0].name, "Strong");
        assert_eq!(result.results[1].name, "Weak");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let ranker = Ranker::with_default_weights();
        let services: Vec<Service> = (0..4)
            .map(|i| create_service(&format!("Service {}", i), 100.0, 1.0))
            .collect();

        let result = ranker.rank(&create_query(1000.0), &services);
        let names: Vec<&str> = result.results.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Service 0", "Service 1", "Service 2", "Service 3"]);
    }

    #[test]
    fn test_respects_top_k() {
        let ranker = Ranker::new(ScoringWeights::default(), 3);
        let services: Vec<Service> = (0..10)
            .map(|i| create_service(&i.to_string(), 100.0, i as f64))
            .collect();

        let result = ranker.rank(&create_query(1000.0), &services);

        assert_eq!(result.results.len(), 3);
        assert_eq!(result.results[0].name, "9");
    }

    #[test]
    fn test_nan_score_does_not_disturb_order() {
        // 0 * inf is NaN
        let weights = ScoringWeights { base_score: 0.0, ..ScoringWeights::default() };
        let ranker = Ranker::new(weights, 10);

        let mut low = create_service("Low", 100.0, 0.0);
        low.skin_types = tokens(&["dry"]);
        low.problems = tokens(&["wrinkles"]);
        let mut mid = create_service("Mid", 100.0, 0.0);
        mid.skin_types = tokens(&["dry"]);
        let broken = create_service("Broken", 100.0, f64::INFINITY);
        let high = create_service("High", 100.0, 0.0);

        let result = ranker.rank(&create_query(1000.0), &[low, broken, high, mid]);
        let names: Vec<&str> = result
            .results
            .iter()
            .map(|r| r.name.as_str())
            .filter(|name| *name != "Broken")
            .collect();

        assert_eq!(result.results.len(), 4);
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn test_empty_catalog() {
        let result = Ranker::default().rank(&create_query(1000.0), &[]);
        assert!(result.results.is_empty());
        assert_eq!(result.eligible_services, 0);
    }

    #[test]
    fn test_rank_free_function() {
        let services = vec![create_service("Facial A", 500.0, 5.0)];
        let results = rank(&create_query(1000.0), &services, DEFAULT_TOP_K);
        assert_eq!(results, vec![ResultEntry {
            name: "Facial A".to_string(),
            price: 500.0,
            notes: "Facial A notes".to_string(),
        }]);
    }
}
