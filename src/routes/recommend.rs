use actix_web::{error, web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

use crate::core::Ranker;
use crate::models::{
    ErrorResponse, HealthResponse, OptionsResponse, RecommendRequest, RecommendResponse,
    ReloadResponse,
};
use crate::services::{cities_by_province, cities_for, CatalogStore, DEFAULT_PROVINCE, PROVINCES};

/// Gender choices offered by the form
pub const GENDER_OPTIONS: &[&str] = &["Any", "Male", "Female"];

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogStore,
    pub catalog_path: String,
    pub ranker: Ranker,
    pub max_top_k: usize,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .route("/options", web::get().to(get_options))
        .route("/recommend", web::post().to(recommend))
        .route("/catalog/reload", web::post().to(reload_catalog));
}

/// Malformed request bodies still get a recommendation-shaped reply
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let message = format!("Error: {}", err);
    let response = HttpResponse::BadRequest().json(RecommendResponse::failed(message));
    error::InternalError::from_response(err, response).into()
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: state.catalog.snapshot().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Form options endpoint
///
/// GET /api/v1/options
async fn get_options(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.catalog.snapshot();

    HttpResponse::Ok().json(OptionsResponse {
        genders: GENDER_OPTIONS.iter().map(|g| g.to_string()).collect(),
        skin_types: catalog.skin_type_options(),
        skin_problems: catalog.skin_problem_options(),
        provinces: PROVINCES.iter().map(|p| p.to_string()).collect(),
        default_province: DEFAULT_PROVINCE.to_string(),
        cities_by_province: cities_by_province(),
    })
}

/// Recommend services endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "customer_name": "string",
///   "province": "Cavite",
///   "city": "Imus",
///   "gender": "Female",
///   "age": 25,
///   "skin_type": "Oily",
///   "skin_problems": ["Acne"],
///   "budget": "1500",
///   "limit": 5
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: field_errors={:?}", errors);
        return HttpResponse::BadRequest()
            .json(RecommendResponse::failed(format!("Error: {}", errors)));
    }

    let req = req.into_inner();
    let province = req
        .province
        .as_deref()
        .map(str::trim)
        .unwrap_or(DEFAULT_PROVINCE)
        .to_string();
    let city = req.city.trim().to_string();

    let known_cities = cities_for(&province);
    if !city.is_empty() && !known_cities.is_empty() && !known_cities.contains(&city.as_str()) {
        tracing::debug!("City {} is not listed for province {}", city, province);
    }

    let query = req.to_query();
    let top_k = req
        .limit
        .unwrap_or_else(|| state.ranker.top_k())
        .min(state.max_top_k);

    let catalog = state.catalog.snapshot();
    let result = state.ranker.rank_top(&query, catalog.services(), top_k);

    tracing::info!(
        "Returning {} services (from {} within budget, {} in catalog)",
        result.results.len(),
        result.eligible_services,
        result.total_services
    );

    HttpResponse::Ok().json(RecommendResponse {
        customer_name: req.customer_name.trim().to_string(),
        province,
        city,
        results: result.results,
        total_services: result.total_services,
        eligible_services: result.eligible_services,
        error: None,
    })
}

/// Reload the catalog from its configured path
///
/// POST /api/v1/catalog/reload
async fn reload_catalog(state: web::Data<AppState>) -> impl Responder {
    match state.catalog.reload(&state.catalog_path) {
        Ok(services) => {
            tracing::info!("Catalog reloaded with {} services", services);
            HttpResponse::Ok().json(ReloadResponse {
                success: true,
                services,
            })
        }
        Err(e) => {
            tracing::error!("Failed to reload catalog from {}: {}", state.catalog_path, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to reload catalog".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
