//! Estadísticas de fallas por zona (derivadas, nunca persistidas)

use serde::Serialize;

/// Severidad para la gráfica de barras
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Normal,
}

impl Severity {
    pub fn for_count(count: usize) -> Self {
        if count > 1 {
            Severity::Critical
        } else {
            Severity::Normal
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ZoneStat {
    pub zone: String,
    pub count: usize,
    pub severity: Severity,
}

impl ZoneStat {
    pub fn new(zone: String, count: usize) -> Self {
        Self {
            zone,
            count,
            severity: Severity::for_count(count),
        }
    }
}
