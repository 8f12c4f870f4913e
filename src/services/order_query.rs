//! Vista de consulta de la tabla de administración: filtro por zona y orden.
//! Trabaja siempre sobre una copia; el snapshot del store no se toca.

use crate::models::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Id,
    Priority,
}

impl SortBy {
    /// Valores desconocidos caen en el orden por id
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "priority" => SortBy::Priority,
            _ => SortBy::Id,
        }
    }
}

pub fn query(orders: &[Order], sort_by: &str, zone_filter: &str) -> Vec<Order> {
    let zone_filter = zone_filter.trim();

    let mut view: Vec<Order> = orders
        .iter()
        .filter(|o| zone_filter.is_empty() || o.zone == zone_filter)
        .cloned()
        .collect();

    match SortBy::parse(sort_by) {
        SortBy::Priority => view.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
        SortBy::Id => view.sort_by_key(|o| o.id),
    }
    view
}
