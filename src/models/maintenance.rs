//! Modelo de MaintenanceEvent
//!
//! Un evento de mantenimiento es inmutable una vez registrado: nunca se
//! actualiza ni se borra desde este core.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catálogo de tipos de mantenimiento conocidos. El campo `kind` es un
/// string abierto: valores fuera del catálogo se aceptan tal cual.
pub const MAINTENANCE_KINDS: [&str; 9] = [
    "CAMERA RESET",
    "CLOCK ADJUSTMENT",
    "CABLE REPLACEMENT",
    "IMAGE RETRIEVAL",
    "LENS CLEANING",
    "FIRMWARE UPDATE",
    "REPOSITIONING",
    "FUNCTION TEST",
    "OTHER",
];

/// Técnico por defecto cuando el evento se registra sin uno
pub const DEFAULT_TECHNICIAN: &str = "system";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceEvent {
    pub id: i64,
    pub plate: String,
    pub occurred_at: String,
    pub kind: String,
    pub technician: String,
    pub notes: Option<String>,
}
