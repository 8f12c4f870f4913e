use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::order_controller::OrderController;
use crate::dto::order_dto::{
    AdminPanelResponse, ApiResponse, AssignQuery, AssignTechnicianRequest,
    AssignTechnicianResponse, OrderQueryParams, ZoneStatsResponse,
};
use crate::models::Order;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/reload", post(reload_orders))
        .route("/zone-stats", get(zone_stats))
        .route("/:id/technician", put(assign_technician))
}

pub fn create_admin_router() -> Router<AppState> {
    Router::new().route("/panel", get(admin_panel))
}

async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<OrderQueryParams>,
) -> Json<Vec<Order>> {
    let controller = OrderController::new(state.order_store.clone());
    Json(controller.list(params).await)
}

async fn reload_orders(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Order>>>, AppError> {
    let controller = OrderController::new(state.order_store.clone());
    let response = controller.reload().await?;
    Ok(Json(response))
}

async fn assign_technician(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<AssignQuery>,
    Json(request): Json<AssignTechnicianRequest>,
) -> Result<Json<ApiResponse<AssignTechnicianResponse>>, AppError> {
    let controller = OrderController::new(state.order_store.clone());
    let response = controller
        .assign_technician(id, &request.technician, query.wait)
        .await?;
    Ok(Json(response))
}

async fn zone_stats(State(state): State<AppState>) -> Json<ZoneStatsResponse> {
    let controller = OrderController::new(state.order_store.clone());
    Json(controller.zone_stats().await)
}

async fn admin_panel(
    State(state): State<AppState>,
    Query(params): Query<OrderQueryParams>,
) -> Json<AdminPanelResponse> {
    let controller = OrderController::new(state.order_store.clone());
    Json(controller.admin_panel(params).await)
}
