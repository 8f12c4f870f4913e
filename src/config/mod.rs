//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de entorno y del backend de órdenes.

pub mod environment;

pub use environment::*;
