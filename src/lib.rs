//! WaveLink - backend de órdenes de servicio
//!
//! Store de órdenes con asignación optimista de técnicos, estadísticas de
//! fallas por zona y la API HTTP que consume el panel de administración.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
