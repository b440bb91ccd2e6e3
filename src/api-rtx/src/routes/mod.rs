use axum::{
    Router, middleware,
    routing::{get, post},
};
use core_rtx::health_check;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod catalog;
pub mod logging_middleware;
pub mod robots_txt;

//
// Router
//

pub fn router() -> Router {
    let api_routes = Router::new()
        .route("/api/robots_txt", get(robots_txt::get_robots_txt))
        .route("/api/robots_txt", post(robots_txt::post_robots_txt))
        .route("/api/download", get(robots_txt::get_download))
        .route("/api/strategies", get(catalog::get_strategies))
        .route("/api/platforms", get(catalog::get_platforms))
        .route("/api/crawlers", get(catalog::get_crawlers));

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes)
        // Serve static assets from frontend pkg directory
        .nest_service("/pkg", ServeDir::new("src/front-rtx/www/pkg"))
        // Everything else gets the single-page form
        .fallback_service(ServeFile::new("src/front-rtx/www/index.html"))
        // Custom route access logging
        .layer(middleware::from_fn(logging_middleware::log_route_access))
        // Tracing middleware
        .layer(TraceLayer::new_for_http())
}
