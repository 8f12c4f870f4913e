//! Services module
//!
//! Este módulo contiene la lógica de negocio: el store de órdenes,
//! las vistas derivadas del panel de administración y el alta de tickets.

pub mod order_query;
pub mod order_store;
pub mod ticket_service;
pub mod zone_stats;

pub use order_store::{AssignError, AssignmentOutcome, OrderStore, PendingAssignment};
pub use ticket_service::TicketService;
