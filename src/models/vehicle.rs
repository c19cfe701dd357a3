//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle que mapea exactamente a la
//! tabla `vehicles`. Las columnas `last_maintenance_at` y
//! `last_maintenance_type` son una caché desnormalizada del último evento
//! de mantenimiento; el historial de eventos sigue siendo la fuente de
//! verdad y el ledger mantiene ambos consistentes en la misma transacción.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub plate: String,
    pub model: Option<String>,
    pub year: Option<i64>,
    pub color: Option<String>,
    pub registered_at: String,
    pub last_maintenance_at: Option<String>,
    pub last_maintenance_type: Option<String>,
    pub notes: Option<String>,
}
