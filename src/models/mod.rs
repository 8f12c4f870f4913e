//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean
//! a la tabla de órdenes del backend y sus vistas derivadas.

pub mod catalog;
pub mod order;
pub mod zone_stat;

pub use order::{NewOrder, Order, OrderStatus, Priority};
pub use zone_stat::{Severity, ZoneStat};
