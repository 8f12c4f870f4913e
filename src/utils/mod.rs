//! Utilidades del sistema
//!
//! Manejo de errores compartido por repositorios, servicios y API.

pub mod errors;
