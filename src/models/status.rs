//! Estado de mantenimiento derivado
//!
//! `StatusInfo` no se persiste: se calcula bajo demanda a partir de
//! `last_maintenance_at` del vehículo.

use serde::{Deserialize, Serialize};

/// Franja de estado según los días desde el último mantenimiento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl StatusTier {
    pub fn label(&self) -> &'static str {
        match self {
            StatusTier::Ok => "ok",
            StatusTier::Warning => "warning",
            StatusTier::Critical => "critical",
            StatusTier::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusInfo {
    pub tier: StatusTier,
    pub days_since: Option<i64>,
    pub message: String,
}
