//! Repositorios
//!
//! Acceso al backend externo donde viven las órdenes.

pub mod memory_order_repository;
pub mod order_repository;

pub use memory_order_repository::InMemoryOrderRepository;
pub use order_repository::{OrderRepository, SupabaseOrderRepository};
