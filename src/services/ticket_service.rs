//! Servicio de tickets del cliente
//!
//! Alta de reportes de falla y solicitudes de instalación, e historial
//! de tickets por cliente. Las órdenes nacen PENDIENTE y sin técnico.

use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::ticket_dto::{CreateTicketRequest, TicketKind};
use crate::models::{NewOrder, Order, OrderStatus, Priority};
use crate::repositories::OrderRepository;
use crate::utils::errors::{bad_request_error, AppResult};

pub const INSTALLATION_TYPE: &str = "Instalación Nueva";

pub struct TicketService {
    repository: Arc<dyn OrderRepository>,
}

impl TicketService {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Valida la solicitud y la inserta en el backend
    pub async fn submit(&self, request: CreateTicketRequest) -> AppResult<Order> {
        request.validate()?;
        let new_order = build_new_order(request)?;

        let created = self.repository.insert(new_order).await?;
        info!(
            "🎫 Ticket #{} creado para {} en {} ({})",
            created.id, created.client, created.zone, created.kind
        );
        Ok(created)
    }

    pub async fn history(&self, client: &str) -> AppResult<Vec<Order>> {
        let client = client.trim();
        if client.is_empty() {
            return Err(bad_request_error("El nombre del cliente es requerido"));
        }
        Ok(self.repository.fetch_by_client(client).await?)
    }
}

/// Fallas: prioridad Alta, el tipo es la descripción del problema.
/// Instalaciones: prioridad Baja, solo en días hábiles.
fn build_new_order(request: CreateTicketRequest) -> AppResult<NewOrder> {
    let (kind, priority) = match request.kind {
        TicketKind::Fault => {
            let problem = request
                .problem
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .ok_or_else(|| bad_request_error("La descripción del problema es requerida"))?;
            (problem.to_string(), Priority::High)
        }
        TicketKind::Installation => {
            let date = request
                .preferred_date
                .ok_or_else(|| bad_request_error("La fecha deseada es requerida"))?;
            if !is_business_day(date) {
                return Err(bad_request_error("La instalación solo puede agendarse en días hábiles"));
            }
            (INSTALLATION_TYPE.to_string(), Priority::Low)
        }
    };

    Ok(NewOrder {
        client: request.client.trim().to_string(),
        zone: request.zone,
        kind,
        priority,
        status: OrderStatus::Pending,
        technician: String::new(),
    })
}

fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Mensaje de confirmación que se muestra al cliente
pub fn confirmation_message(order: &Order) -> String {
    format!(
        "Ticket #{} creado con éxito para la zona de {}. Esté atento a su Historial de Tickets.",
        order.id, order.zone
    )
}
