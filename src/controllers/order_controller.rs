use crate::dto::order_dto::{
    AdminPanelResponse, ApiResponse, AssignTechnicianResponse, OrderQueryParams, ZoneStatsResponse,
};
use crate::models::Order;
use crate::services::zone_stats::max_count;
use crate::services::{AssignmentOutcome, OrderStore};
use crate::utils::errors::AppError;

pub struct OrderController {
    store: OrderStore,
}

impl OrderController {
    pub fn new(store: OrderStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, params: OrderQueryParams) -> Vec<Order> {
        self.store
            .query(
                params.sort_by.as_deref().unwrap_or("id"),
                params.zone.as_deref().unwrap_or(""),
            )
            .await
    }

    pub async fn reload(&self) -> Result<ApiResponse<Vec<Order>>, AppError> {
        let orders = self.store.load_all().await?;
        let message = format!("{} órdenes cargadas", orders.len());
        Ok(ApiResponse::success_with_message(orders, message))
    }

    /// Sin `wait` responde con el cambio optimista y deja la persistencia
    /// corriendo; con `wait` devuelve el resultado del backend.
    pub async fn assign_technician(
        &self,
        order_id: i64,
        technician: &str,
        wait: bool,
    ) -> Result<ApiResponse<AssignTechnicianResponse>, AppError> {
        let pending = self.store.assign_technician(order_id, technician).await?;
        let optimistic = pending.order.clone();

        if !wait {
            return Ok(ApiResponse::success(AssignTechnicianResponse {
                order: optimistic,
                outcome: None,
            }));
        }

        let outcome = pending.outcome().await;
        let response = match &outcome {
            AssignmentOutcome::Persisted => ApiResponse::success(AssignTechnicianResponse {
                order: optimistic,
                outcome: Some(outcome.clone()),
            }),
            AssignmentOutcome::Reconciled { warning, .. } => {
                // Tras la recarga la orden puede haber desaparecido
                let order = self.store.get(order_id).await.unwrap_or(optimistic);
                ApiResponse {
                    success: false,
                    message: Some(warning.clone()),
                    data: Some(AssignTechnicianResponse {
                        order,
                        outcome: Some(outcome.clone()),
                    }),
                }
            }
        };
        Ok(response)
    }

    pub async fn zone_stats(&self) -> ZoneStatsResponse {
        let stats = self.store.zone_statistics().await;
        ZoneStatsResponse {
            max_count: max_count(&stats),
            stats,
        }
    }

    pub async fn admin_panel(&self, params: OrderQueryParams) -> AdminPanelResponse {
        let orders = self.list(params).await;
        let zone_stats = self.store.zone_statistics().await;
        AdminPanelResponse {
            orders,
            max_count: max_count(&zone_stats),
            zone_stats,
        }
    }
}
