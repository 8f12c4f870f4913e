use serde::{Deserialize, Serialize};

use crate::models::{Order, ZoneStat};
use crate::services::order_store::AssignmentOutcome;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

// Parámetros de la tabla de administración (?sort_by=priority&zone=Mariño)
#[derive(Debug, Default, Deserialize)]
pub struct OrderQueryParams {
    pub sort_by: Option<String>,
    pub zone: Option<String>,
}

// Request para asignar técnico ("" = desasignar)
#[derive(Debug, Deserialize)]
pub struct AssignTechnicianRequest {
    #[serde(default)]
    pub technician: String,
}

// ?wait=true espera la confirmación del backend
#[derive(Debug, Default, Deserialize)]
pub struct AssignQuery {
    #[serde(default)]
    pub wait: bool,
}

#[derive(Debug, Serialize)]
pub struct AssignTechnicianResponse {
    pub order: Order,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<AssignmentOutcome>,
}

#[derive(Debug, Serialize)]
pub struct ZoneStatsResponse {
    pub stats: Vec<ZoneStat>,
    pub max_count: usize,
}

// Panel completo: tabla + gráfica en una sola llamada
#[derive(Debug, Serialize)]
pub struct AdminPanelResponse {
    pub orders: Vec<Order>,
    pub zone_stats: Vec<ZoneStat>,
    pub max_count: usize,
}
