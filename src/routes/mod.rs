// Route exports
pub mod recommend;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(recommend::health_check))
        .service(
            web::scope("/api/v1")
                .configure(recommend::configure),
        );
}
