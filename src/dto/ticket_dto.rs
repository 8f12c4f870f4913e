use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::catalog::is_municipality;
use crate::models::Order;

/// Tipo de solicitud del cliente
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TicketKind {
    #[serde(rename = "falla")]
    Fault,
    #[serde(rename = "instalacion")]
    Installation,
}

/// Request para generar una orden de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTicketRequest {
    #[validate(length(min = 2, max = 120))]
    pub client: String,

    #[validate(custom = "validate_zone")]
    pub zone: String,

    pub kind: TicketKind,

    // Requerido para fallas
    #[validate(length(min = 5, max = 500))]
    pub problem: Option<String>,

    // Requerido para instalaciones
    pub preferred_date: Option<NaiveDate>,
}

fn validate_zone(zone: &str) -> Result<(), ValidationError> {
    if is_municipality(zone) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_municipality"))
    }
}

#[derive(Debug, Deserialize)]
pub struct TicketHistoryParams {
    pub client: String,
}

#[derive(Debug, Serialize)]
pub struct TicketCreatedResponse {
    pub ticket: Order,
    pub confirmation: String,
}
