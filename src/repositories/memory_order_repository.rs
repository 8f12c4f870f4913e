//! Backend de órdenes en memoria
//!
//! Se usa en modo demo (`BACKEND_MODE=memory`) y en tests. Permite simular
//! fallos de lectura o escritura para ejercitar la reconciliación.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;

use super::order_repository::OrderRepository;
use crate::models::{NewOrder, Order, OrderStatus};
use crate::utils::errors::TransportError;

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fetch_calls: AtomicU64,
    update_calls: AtomicU64,
}

impl InMemoryOrderRepository {
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: Mutex::new(orders),
            ..Self::default()
        }
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fetch_calls(&self) -> u64 {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> u64 {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Copia de una fila tal como está "persistida"
    pub async fn stored(&self, id: i64) -> Option<Order> {
        self.orders.lock().await.iter().find(|o| o.id == id).cloned()
    }

    /// Borra una fila, como si otro cliente la hubiera eliminado
    pub async fn remove(&self, id: i64) {
        self.orders.lock().await.retain(|o| o.id != id);
    }

    fn check_reads(&self) -> Result<(), TransportError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(TransportError::Network("simulated read failure".to_string()));
        }
        Ok(())
    }

    fn check_writes(&self) -> Result<(), TransportError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(TransportError::Network("simulated write failure".to_string()));
        }
        Ok(())
    }
}

fn sorted_by_id(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by_key(|o| o.id);
    orders
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn fetch_all(&self) -> Result<Vec<Order>, TransportError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reads()?;
        Ok(sorted_by_id(self.orders.lock().await.clone()))
    }

    async fn fetch_by_client(&self, client: &str) -> Result<Vec<Order>, TransportError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reads()?;
        let matching = self
            .orders
            .lock()
            .await
            .iter()
            .filter(|o| o.client == client)
            .cloned()
            .collect();
        Ok(sorted_by_id(matching))
    }

    async fn update_assignment(
        &self,
        id: i64,
        technician: &str,
        status: OrderStatus,
    ) -> Result<(), TransportError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_writes()?;

        let mut orders = self.orders.lock().await;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(TransportError::NotFound(id))?;
        order.technician = technician.to_string();
        order.status = status;
        Ok(())
    }

    async fn insert(&self, order: NewOrder) -> Result<Order, TransportError> {
        self.check_writes()?;

        let mut orders = self.orders.lock().await;
        // Máximo + 1 para que un borrado no reutilice ids
        let next_id = orders.iter().map(|o| o.id).max().unwrap_or(100) + 1;
        let created = order.into_order(next_id);
        orders.push(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::demo_orders;
    use crate::models::Priority;

    fn new_ticket(client: &str) -> NewOrder {
        NewOrder {
            client: client.to_string(),
            zone: "Gómez".to_string(),
            kind: "Caída Total".to_string(),
            priority: Priority::High,
            status: OrderStatus::Pending,
            technician: String::new(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_next_id() {
        let repo = InMemoryOrderRepository::with_orders(demo_orders());
        let created = repo.insert(new_ticket("Lucía Marín")).await.unwrap();
        assert_eq!(created.id, 106);

        let empty = InMemoryOrderRepository::default();
        assert_eq!(empty.insert(new_ticket("x")).await.unwrap().id, 101);
    }

    #[tokio::test]
    async fn test_fetch_by_client_filters_and_orders() {
        let repo = InMemoryOrderRepository::with_orders(demo_orders());
        repo.insert(new_ticket("Carlos Pérez")).await.unwrap();

        let history = repo.fetch_by_client("Carlos Pérez").await.unwrap();
        let ids: Vec<i64> = history.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![101, 106]);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = InMemoryOrderRepository::with_orders(demo_orders());
        let err = repo
            .update_assignment(999, "Ana V.", OrderStatus::Assigned)
            .await
            .unwrap_err();
        assert_eq!(err, TransportError::NotFound(999));
    }

    #[tokio::test]
    async fn test_simulated_failures() {
        let repo = InMemoryOrderRepository::with_orders(demo_orders());
        repo.set_fail_reads(true);
        assert!(repo.fetch_all().await.is_err());
        repo.set_fail_reads(false);
        assert_eq!(repo.fetch_all().await.unwrap().len(), 5);

        repo.set_fail_writes(true);
        assert!(repo
            .update_assignment(101, "Ana V.", OrderStatus::Assigned)
            .await
            .is_err());
        assert_eq!(repo.stored(101).await.unwrap().technician, "");
    }
}
