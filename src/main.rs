use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use glowmatch::config::Settings;
use glowmatch::core::Ranker;
use glowmatch::models::ScoringWeights;
use glowmatch::routes::{self, recommend::AppState};
use glowmatch::services::{Catalog, CatalogStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting Glowmatch recommendation service...");

    // A catalog that cannot be read is fatal at startup
    let catalog = Catalog::load(&settings.catalog.path).map_err(|e| {
        error!("Failed to load catalog: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    let weights = ScoringWeights::from(&settings.ranking.weights);
    let ranker = Ranker::new(weights, settings.ranking.top_k);

    info!("Ranker initialized with weights: {:?}, top_k: {}", weights, settings.ranking.top_k);

    let app_state = AppState {
        catalog: CatalogStore::new(catalog),
        catalog_path: settings.catalog.path.clone(),
        ranker,
        max_top_k: settings.ranking.max_top_k,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
