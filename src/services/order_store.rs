//! Order Store
//!
//! Snapshot en memoria de las órdenes de servicio. Solo dos operaciones
//! lo modifican: `load_all` (reemplazo completo) y `assign_technician`
//! (actualización optimista + persistencia en segundo plano, con
//! reconciliación por recarga si el backend falla).
//!
//! Las escrituras al backend pasan por un único worker, una a la vez y en
//! el mismo orden en que se aplicaron los cambios locales.

use serde::Serialize;
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, RwLock};
use tracing::{debug, error, info, warn};

use crate::models::{Order, OrderStatus, ZoneStat};
use crate::repositories::OrderRepository;
use crate::services::{order_query, zone_stats};
use crate::utils::errors::TransportError;

/// Rechazos síncronos, antes de tocar el snapshot
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssignError {
    #[error("Order {0} is not in the current snapshot")]
    UnknownOrder(i64),

    #[error("Order {0} is closed and cannot be reassigned")]
    OrderClosed(i64),
}

/// Resultado final de la persistencia de una asignación
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum AssignmentOutcome {
    Persisted,
    /// El backend rechazó el cambio y el snapshot se recargó
    Reconciled { warning: String, missing_order: bool },
}

/// Asignación ya aplicada localmente, con la persistencia en cola
pub struct PendingAssignment {
    pub order: Order,
    reply: oneshot::Receiver<AssignmentOutcome>,
}

impl PendingAssignment {
    /// Espera a que el backend confirme (o a que termine la reconciliación)
    pub async fn outcome(self) -> AssignmentOutcome {
        match self.reply.await {
            Ok(outcome) => outcome,
            Err(_) => AssignmentOutcome::Reconciled {
                warning: format!("persist worker dropped the assignment of order {}", self.order.id),
                missing_order: false,
            },
        }
    }
}

struct PersistJob {
    order_id: i64,
    technician: String,
    status: OrderStatus,
    reply: oneshot::Sender<AssignmentOutcome>,
}

/// Estado compartido con el worker; no guarda el sender, así el worker
/// termina cuando se sueltan todas las copias del store.
struct Snapshot {
    repository: Arc<dyn OrderRepository>,
    orders: RwLock<Vec<Order>>,
}

impl Snapshot {
    async fn load_all(&self) -> Result<Vec<Order>, TransportError> {
        match self.repository.fetch_all().await {
            Ok(mut fresh) => {
                fresh.sort_by_key(|o| o.id);
                let mut orders = self.orders.write().await;
                *orders = fresh;
                info!(
                    "✅ {} órdenes cargadas desde backend '{}'",
                    orders.len(),
                    self.repository.backend_tag()
                );
                Ok(orders.clone())
            }
            Err(e) => {
                warn!("⚠️ Error cargando órdenes, se mantiene el snapshot actual: {}", e);
                Err(e)
            }
        }
    }

    async fn persist_assignment(
        &self,
        order_id: i64,
        technician: &str,
        status: OrderStatus,
    ) -> AssignmentOutcome {
        match self
            .repository
            .update_assignment(order_id, technician, status)
            .await
        {
            Ok(()) => AssignmentOutcome::Persisted,
            Err(e) => {
                warn!("⚠️ Error al asignar técnico a la orden {}: {} - recargando", order_id, e);
                if let Err(reload_err) = self.load_all().await {
                    error!("❌ La reconciliación de la orden {} también falló: {}", order_id, reload_err);
                }
                AssignmentOutcome::Reconciled {
                    warning: format!("No se pudo guardar la asignación de la orden {}: {}", order_id, e),
                    missing_order: e.is_missing_order(),
                }
            }
        }
    }
}

async fn persist_worker(snapshot: Arc<Snapshot>, mut jobs: mpsc::UnboundedReceiver<PersistJob>) {
    debug!("💾 Worker de persistencia iniciado");
    while let Some(job) = jobs.recv().await {
        let outcome = snapshot
            .persist_assignment(job.order_id, &job.technician, job.status)
            .await;
        // El llamador puede no esperar el resultado
        let _ = job.reply.send(outcome);
    }
    debug!("💾 Worker de persistencia terminado");
}

#[derive(Clone)]
pub struct OrderStore {
    snapshot: Arc<Snapshot>,
    persist_tx: Arc<OnceLock<mpsc::UnboundedSender<PersistJob>>>,
}

impl OrderStore {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self {
            snapshot: Arc::new(Snapshot {
                repository,
                orders: RwLock::new(Vec::new()),
            }),
            persist_tx: Arc::new(OnceLock::new()),
        }
    }

    /// Reemplaza todo el snapshot con lo que devuelve el backend.
    /// Si falla, el snapshot anterior queda intacto.
    pub async fn load_all(&self) -> Result<Vec<Order>, TransportError> {
        self.snapshot.load_all().await
    }

    /// Se arranca con la primera asignación, ya dentro del runtime
    fn persist_queue(&self) -> &mpsc::UnboundedSender<PersistJob> {
        self.persist_tx.get_or_init(|| {
            let (tx, rx) = mpsc::unbounded_channel();
            tokio::spawn(persist_worker(self.snapshot.clone(), rx));
            tx
        })
    }

    /// Asigna (o desasigna, con técnico vacío) una orden.
    ///
    /// El cambio local es visible en cuanto la función retorna; la
    /// persistencia queda en cola y, si falla, recarga todo.
    pub async fn assign_technician(
        &self,
        order_id: i64,
        technician: &str,
    ) -> Result<PendingAssignment, AssignError> {
        let technician = technician.trim().to_string();
        let (reply_tx, reply_rx) = oneshot::channel();

        let updated = {
            let mut orders = self.snapshot.orders.write().await;
            let order = orders
                .iter_mut()
                .find(|o| o.id == order_id)
                .ok_or(AssignError::UnknownOrder(order_id))?;
            if order.is_closed() {
                return Err(AssignError::OrderClosed(order_id));
            }
            order.assign(&technician);

            // Encolar con el lock tomado: orden de la cola == orden local
            let job = PersistJob {
                order_id,
                technician: technician.clone(),
                status: order.status,
                reply: reply_tx,
            };
            if self.persist_queue().send(job).is_err() {
                error!("❌ Worker de persistencia caído, la orden {} no se guardará", order_id);
            }
            order.clone()
        };

        if technician.is_empty() {
            info!("🔄 Orden {} devuelta a PENDIENTE", order_id);
        } else {
            info!("👷 Técnico '{}' asignado a la orden {}", technician, order_id);
        }

        Ok(PendingAssignment {
            order: updated,
            reply: reply_rx,
        })
    }

    /// Copia del snapshot en su orden canónico (id ascendente)
    pub async fn snapshot(&self) -> Vec<Order> {
        self.snapshot.orders.read().await.clone()
    }

    pub async fn get(&self, order_id: i64) -> Option<Order> {
        self.snapshot.orders.read().await.iter().find(|o| o.id == order_id).cloned()
    }

    pub async fn zone_statistics(&self) -> Vec<ZoneStat> {
        zone_stats::zone_statistics(&self.snapshot.orders.read().await)
    }

    pub async fn query(&self, sort_by: &str, zone_filter: &str) -> Vec<Order> {
        order_query::query(&self.snapshot.orders.read().await, sort_by, zone_filter)
    }

    pub fn backend_tag(&self) -> &'static str {
        self.snapshot.repository.backend_tag()
    }
}
