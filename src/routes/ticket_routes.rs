use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::ticket_controller::TicketController;
use crate::dto::order_dto::ApiResponse;
use crate::dto::ticket_dto::{CreateTicketRequest, TicketCreatedResponse, TicketHistoryParams};
use crate::models::Order;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_ticket_router() -> Router<AppState> {
    Router::new().route("/", get(ticket_history).post(create_ticket))
}

async fn create_ticket(
    State(state): State<AppState>,
    Json(request): Json<CreateTicketRequest>,
) -> Result<Json<ApiResponse<TicketCreatedResponse>>, AppError> {
    let controller = TicketController::new(state.tickets.clone(), state.order_store.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn ticket_history(
    State(state): State<AppState>,
    Query(params): Query<TicketHistoryParams>,
) -> Result<Json<Vec<Order>>, AppError> {
    let controller = TicketController::new(state.tickets.clone(), state.order_store.clone());
    let tickets = controller.history(&params.client).await?;
    Ok(Json(tickets))
}
