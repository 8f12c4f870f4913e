//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y del backend de órdenes.

use std::env;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Dónde viven las órdenes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendMode {
    /// Proyecto Supabase vía PostgREST
    Supabase { url: String, anon_key: String },
    /// Backend en memoria con órdenes de demostración
    Memory,
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub backend: BackendMode,
    pub orders_table: String,
    pub backend_timeout: Duration,
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Construye la configuración desde cualquier fuente clave/valor
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => 3000,
        };

        let backend = match var("BACKEND_MODE").as_deref().unwrap_or("supabase") {
            "memory" => BackendMode::Memory,
            "supabase" => BackendMode::Supabase {
                url: var("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?,
                anon_key: var("SUPABASE_ANON_KEY").ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?,
            },
            other => {
                return Err(ConfigError::Invalid {
                    name: "BACKEND_MODE",
                    value: other.to_string(),
                })
            }
        };

        let backend_timeout = match var("BACKEND_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(
                value
                    .parse()
                    .map_err(|_| ConfigError::Invalid { name: "BACKEND_TIMEOUT_SECS", value })?,
            ),
            None => Duration::from_secs(10),
        };

        Ok(Self {
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            port,
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            cors_origins: var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            backend,
            orders_table: var("ORDERS_TABLE").unwrap_or_else(|| "orders".to_string()),
            backend_timeout,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
