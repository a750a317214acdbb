use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::request_logger::request_logger;

/// All application routes; anything unmatched is served from `static_dir`
pub fn configure_routes(static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Order search / list
        .route("/pedidos", get(handlers::a003_order::list))
        // Equipment registration
        .route(
            "/registro_equipo",
            post(handlers::a002_equipment_registration::register),
        )
        // Product catalog
        .route("/api/catalog", get(handlers::a001_product_catalog::list_all))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
