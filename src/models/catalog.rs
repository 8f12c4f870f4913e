//! Catálogo de servicio
//!
//! Municipios atendidos, técnicos disponibles y órdenes de demostración
//! para el modo de backend en memoria.

use super::order::{Order, OrderStatus, Priority};

/// Municipios del área de servicio
pub const MUNICIPALITIES: [&str; 11] = [
    "Arismendi",
    "García",
    "Gómez",
    "Maneiro",
    "Marcano",
    "Mariño",
    "Macanao",
    "Tubores",
    "Díaz",
    "Villalba",
    "Antolín del Campo",
];

/// Técnicos de campo
pub const TECHNICIANS: [&str; 4] = ["Juan B.", "Ana V.", "Luis R.", "María S."];

pub fn is_municipality(zone: &str) -> bool {
    MUNICIPALITIES.contains(&zone)
}

/// Órdenes iniciales para `BACKEND_MODE=memory`
pub fn demo_orders() -> Vec<Order> {
    let order = |id, client: &str, zone: &str, kind: &str, priority, status, technician: &str| Order {
        id,
        client: client.to_string(),
        zone: zone.to_string(),
        kind: kind.to_string(),
        priority,
        status,
        technician: technician.to_string(),
        created_at: None,
    };

    vec![
        order(101, "Carlos Pérez", "Mariño", "Caída Total", Priority::High, OrderStatus::Pending, ""),
        order(102, "Ana Rodríguez", "Maneiro", "Instalación Nueva", Priority::Low, OrderStatus::Pending, ""),
        order(103, "David Gil", "García", "Intermitente", Priority::Medium, OrderStatus::Assigned, "Juan B."),
        order(104, "Marta López", "Tubores", "Caída Total", Priority::High, OrderStatus::Pending, ""),
        order(105, "Pedro Días", "Arismendi", "Instalación Nueva", Priority::Low, OrderStatus::Closed, "Ana V."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_orders_respect_assignment_invariant() {
        for order in demo_orders() {
            assert!(is_municipality(&order.zone), "zona desconocida: {}", order.zone);
            if order.status == OrderStatus::Assigned {
                assert!(!order.technician.is_empty());
            }
            if order.status == OrderStatus::Pending {
                assert!(order.technician.is_empty());
            }
        }
    }

    #[test]
    fn test_is_municipality() {
        assert!(is_municipality("Antolín del Campo"));
        assert!(!is_municipality("Caracas"));
    }
}
