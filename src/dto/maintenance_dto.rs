//! DTOs de mantenimientos

use serde::Deserialize;

/// Request para registrar un mantenimiento.
/// `occurred_at` admite los dos formatos persistidos; si falta se usa el
/// instante actual. Debe ser posterior a cualquier evento previo de la
/// placa para que la caché desnormalizada siga siendo exacta.
#[derive(Debug, Deserialize)]
pub struct RecordMaintenanceRequest {
    pub plate: String,
    pub kind: String,
    pub technician: Option<String>,
    pub notes: Option<String>,
    pub occurred_at: Option<String>,
}

/// Query params del histórico de mantenimientos
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub plate: Option<String>,
    pub limit: Option<i64>,
}
