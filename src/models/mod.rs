// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{RawServiceRow, Service, Query, ResultEntry, ScoringWeights, ANY_GENDER};
pub use requests::{FormValue, RecommendRequest};
pub use responses::{RecommendResponse, OptionsResponse, HealthResponse, ReloadResponse, ErrorResponse};
