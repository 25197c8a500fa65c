// Core algorithm exports
pub mod filters;
pub mod normalize;
pub mod ranker;
pub mod scoring;

pub use filters::{within_budget, matches_gender, matches_age, matches_skin_type, matches_any_problem};
pub use normalize::{normalize_list, to_lower_trimmed, to_int, cell_to_int, to_float};
pub use ranker::{rank, Ranker, RankResult, DEFAULT_TOP_K};
pub use scoring::calculate_match_score;
