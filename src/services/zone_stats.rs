//! Estadísticas de fallas por zona
//!
//! Transformación pura del snapshot de órdenes al ranking de zonas con
//! órdenes sin resolver. Se recalcula completo en cada llamada.

use std::collections::HashMap;

use crate::models::{Order, ZoneStat};

/// Zonas con al menos una orden PENDIENTE o ASIGNADA, de mayor a menor.
/// Las zonas con solo órdenes cerradas no aparecen.
pub fn zone_statistics(orders: &[Order]) -> Vec<ZoneStat> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for order in orders.iter().filter(|o| o.status.is_unresolved()) {
        let zone = order.zone.as_str();
        let i = *position.entry(zone).or_insert_with(|| {
            counts.push((zone, 0));
            counts.len() - 1
        });
        counts[i].1 += 1;
    }

    let mut stats: Vec<ZoneStat> = counts
        .into_iter()
        .map(|(zone, count)| ZoneStat::new(zone.to_string(), count))
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Escala de la gráfica de barras (0 si no hay zonas)
pub fn max_count(stats: &[ZoneStat]) -> usize {
    stats.iter().map(|s| s.count).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderStatus, Priority, Severity};

    fn order(id: i64, zone: &str, status: OrderStatus) -> Order {
        Order {
            id,
            client: format!("cliente {}", id),
            zone: zone.to_string(),
            kind: "Caída Total".to_string(),
            priority: Priority::Medium,
            technician: if status == OrderStatus::Pending { String::new() } else { "Juan B.".to_string() },
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_ranked_counts_with_severity() {
        let orders = vec![
            order(1, "A", OrderStatus::Pending),
            order(2, "A", OrderStatus::Closed),
            order(3, "B", OrderStatus::Assigned),
            order(4, "B", OrderStatus::Assigned),
        ];

        let stats = zone_statistics(&orders);
        assert_eq!(
            stats,
            vec![
                ZoneStat { zone: "B".to_string(), count: 2, severity: Severity::Critical },
                ZoneStat { zone: "A".to_string(), count: 1, severity: Severity::Normal },
            ]
        );
        assert_eq!(max_count(&stats), 2);
    }

    #[test]
    fn test_closed_only_zone_is_absent() {
        let orders = vec![
            order(1, "Arismendi", OrderStatus::Closed),
            order(2, "Mariño", OrderStatus::Pending),
        ];

        let stats = zone_statistics(&orders);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].zone, "Mariño");
        assert!(stats.iter().all(|s| s.zone != "Arismendi"));
    }

    #[test]
    fn test_empty_input() {
        assert!(zone_statistics(&[]).is_empty());
        assert_eq!(max_count(&[]), 0);
    }

    #[test]
    fn test_serialized_severity() {
        let stat = ZoneStat::new("Tubores".to_string(), 3);
        let value = serde_json::to_value(&stat).unwrap();
        assert_eq!(value["severity"], "critical");
    }
}
