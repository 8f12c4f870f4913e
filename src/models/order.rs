//! Modelo de Order (orden de servicio)
//!
//! Mapea exactamente a la tabla `orders` del backend: reportes de falla
//! y solicitudes de instalación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Prioridad de la orden - ordinal, solo se usa para ordenar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    #[serde(rename = "Alto")]
    High,
    #[serde(rename = "Medio")]
    Medium,
    #[serde(rename = "Bajo")]
    Low,
}

impl Priority {
    /// Alto = 3, Medio = 2, Bajo = 1
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// Estado de la orden
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    #[serde(rename = "PENDIENTE")]
    Pending,
    #[serde(rename = "ASIGNADA")]
    Assigned,
    #[serde(rename = "CERRADA")]
    Closed,
}

impl OrderStatus {
    /// Pendiente o asignada: cuenta como falla activa
    pub fn is_unresolved(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Assigned)
    }

    /// Estado que corresponde a un técnico (vacío = sin asignar)
    pub fn for_technician(technician: &str) -> Self {
        if technician.is_empty() {
            OrderStatus::Pending
        } else {
            OrderStatus::Assigned
        }
    }
}

/// Order principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    pub client: String,
    pub zone: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: Priority,
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub technician: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Aplica una asignación (o desasignación) en sitio y devuelve el nuevo estado
    pub fn assign(&mut self, technician: &str) -> OrderStatus {
        self.technician = technician.to_string();
        self.status = OrderStatus::for_technician(technician);
        self.status
    }

    pub fn is_closed(&self) -> bool {
        self.status == OrderStatus::Closed
    }
}

/// Orden nueva, todavía sin id (lo asigna el backend)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewOrder {
    pub client: String,
    pub zone: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: Priority,
    pub status: OrderStatus,
    pub technician: String,
}

impl NewOrder {
    pub fn into_order(self, id: i64) -> Order {
        Order {
            id,
            client: self.client,
            zone: self.zone,
            kind: self.kind,
            priority: self.priority,
            status: self.status,
            technician: self.technician,
            created_at: Some(Utc::now()),
        }
    }
}

// El backend devuelve `null` en technician para órdenes sin asignar
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_backend_row() {
        let row = json!({
            "id": 101,
            "client": "Carlos Pérez",
            "zone": "Mariño",
            "type": "Caída Total",
            "priority": "Alto",
            "status": "PENDIENTE",
            "technician": null
        });
        let order: Order = serde_json::from_value(row).unwrap();
        assert_eq!(order.priority, Priority::High);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.technician, "");
        assert_eq!(order.kind, "Caída Total");
    }

    #[test]
    fn test_missing_technician_defaults_to_empty() {
        let row = json!({
            "id": 5,
            "client": "Ana",
            "zone": "Maneiro",
            "type": "Intermitente",
            "priority": "Bajo",
            "status": "CERRADA"
        });
        let order: Order = serde_json::from_value(row).unwrap();
        assert!(order.technician.is_empty());
        assert!(order.is_closed());
    }

    #[test]
    fn test_assign_keeps_status_in_sync() {
        let mut order: Order = serde_json::from_value(json!({
            "id": 1, "client": "c", "zone": "García", "type": "t",
            "priority": "Medio", "status": "PENDIENTE", "technician": ""
        }))
        .unwrap();

        assert_eq!(order.assign("Luis R."), OrderStatus::Assigned);
        assert_eq!(order.technician, "Luis R.");
        assert_eq!(order.assign(""), OrderStatus::Pending);
        assert!(order.technician.is_empty());
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }
}
