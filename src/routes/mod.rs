pub mod catalog_routes;
pub mod order_routes;
pub mod ticket_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/orders", order_routes::create_order_router())
        .nest("/api/admin", order_routes::create_admin_router())
        .nest("/api/tickets", ticket_routes::create_ticket_router())
        .nest("/api/catalog", catalog_routes::create_catalog_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "wavelink-orders",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
