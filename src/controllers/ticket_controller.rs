use std::sync::Arc;
use tracing::warn;

use crate::dto::order_dto::ApiResponse;
use crate::dto::ticket_dto::{CreateTicketRequest, TicketCreatedResponse};
use crate::models::Order;
use crate::services::ticket_service::confirmation_message;
use crate::services::{OrderStore, TicketService};
use crate::utils::errors::AppError;

pub struct TicketController {
    tickets: Arc<TicketService>,
    store: OrderStore,
}

impl TicketController {
    pub fn new(tickets: Arc<TicketService>, store: OrderStore) -> Self {
        Self { tickets, store }
    }

    pub async fn create(
        &self,
        request: CreateTicketRequest,
    ) -> Result<ApiResponse<TicketCreatedResponse>, AppError> {
        let ticket = self.tickets.submit(request).await?;

        // El panel de administración solo ve la orden nueva tras recargar
        if let Err(e) = self.store.load_all().await {
            warn!("⚠️ Ticket #{} creado pero el panel no se pudo recargar: {}", ticket.id, e);
        }

        let confirmation = confirmation_message(&ticket);
        Ok(ApiResponse::success_with_message(
            TicketCreatedResponse {
                ticket,
                confirmation: confirmation.clone(),
            },
            confirmation,
        ))
    }

    pub async fn history(&self, client: &str) -> Result<Vec<Order>, AppError> {
        self.tickets.history(client).await
    }
}
