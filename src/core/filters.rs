use crate::models::{Query, Service, ANY_GENDER};

/// Hard budget constraint: services priced above the budget are never ranked
#[inline]
pub fn within_budget(service: &Service, query: &Query) -> bool {
    service.price <= query.budget
}

#[inline]
pub fn matches_gender(service: &Service, query: &Query) -> bool {
    service.gender == ANY_GENDER || service.gender == query.gender
}

/// Inclusive age range check
#[inline]
pub fn matches_age(service: &Service, query: &Query) -> bool {
    service.min_age <= query.age && query.age <= service.max_age
}

/// An unspecified skin type never matches
#[inline]
pub fn matches_skin_type(service: &Service, query: &Query) -> bool {
    !query.skin_type.is_empty() && service.skin_types.contains(&query.skin_type)
}

/// True when any requested problem is treated by the service
#[inline]
pub fn matches_any_problem(service: &Service, query: &Query) -> bool {
    !query.problems.is_empty() && !query.problems.is_disjoint(&service.problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn tokens(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn create_test_service(gender: &str, price: f64) -> Service {
        Service {
            name: "Acne Facial".to_string(),
            skin_types: tokens(&["oily"]),
            problems: tokens(&["acne", "blackheads"]),
            min_age: 18,
            max_age: 60,
            gender: gender.to_string(),
            price,
            base_score: 0.0,
            notes: String::new(),
        }
    }

    fn create_test_query() -> Query {
        Query {
            gender: "female".to_string(),
            age: 25,
            skin_type: "oily".to_string(),
            problems: tokens(&["acne"]),
            budget: 1000.0,
        }
    }

    #[test]
    fn test_budget_boundary() {
        let query = create_test_query();
        assert!(within_budget(&create_test_service("any", 1000.0), &query));
        assert!(!within_budget(&create_test_service("any", 1000.01), &query));
    }

    #[test]
    fn test_zero_budget_allows_free_services_only() {
        let query = Query { budget: 0.0, ..create_test_query() };
        assert!(within_budget(&create_test_service("any", 0.0), &query));
        assert!(!within_budget(&create_test_service("any", 1.0), &query));
    }

    #[test]
    fn test_gender() {
        let query = create_test_query();
        assert!(matches_gender(&create_test_service("any", 0.0), &query));
        assert!(matches_gender(&create_test_service("female", 0.0), &query));
        assert!(!matches_gender(&create_test_service("male", 0.0), &query));
    }

    #[test]
    fn test_age_inclusive_bounds() {
        let service = create_test_service("any", 0.0);
        assert!(matches_age(&service, &Query { age: 18, ..create_test_query() }));
        assert!(matches_age(&service, &Query { age: 60, ..create_test_query() }));
        assert!(!matches_age(&service, &Query { age: 61, ..create_test_query() }));
        assert!(!matches_age(&service, &Query { age: 0, ..create_test_query() }));
    }

    #[test]
    fn test_unspecified_skin_type_never_matches() {
        let service = create_test_service("any", 0.0);
        assert!(matches_skin_type(&service, &create_test_query()));
        assert!(!matches_skin_type(&service, &Query { skin_type: String::new(), ..create_test_query() }));
    }

    #[test]
    fn test_problem_overlap() {
        let service = create_test_service("any", 0.0);
        assert!(matches_any_problem(&service, &create_test_query()));
        assert!(!matches_any_problem(&service, &Query { problems: tokens(&["wrinkles"]), ..create_test_query() }));
        assert!(!matches_any_problem(&service, &Query { problems: BTreeSet::new(), ..create_test_query() }));
    }
}
