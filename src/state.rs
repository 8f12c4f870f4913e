//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::OrderRepository;
use crate::services::{OrderStore, TicketService};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub order_store: OrderStore,
    pub tickets: Arc<TicketService>,
}

impl AppState {
    /// El mismo repositorio alimenta al store y al servicio de tickets
    pub fn new(config: EnvironmentConfig, repository: Arc<dyn OrderRepository>) -> Self {
        Self {
            config,
            order_store: OrderStore::new(repository.clone()),
            tickets: Arc::new(TicketService::new(repository)),
        }
    }
}
