use axum::{routing::get, Json, Router};

use crate::models::catalog::{MUNICIPALITIES, TECHNICIANS};
use crate::state::AppState;

pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/zones", get(list_zones))
        .route("/technicians", get(list_technicians))
}

async fn list_zones() -> Json<Vec<&'static str>> {
    Json(MUNICIPALITIES.to_vec())
}

async fn list_technicians() -> Json<Vec<&'static str>> {
    Json(TECHNICIANS.to_vec())
}
