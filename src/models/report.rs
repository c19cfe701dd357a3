//! Modelos de reportes tabulares
//!
//! Cada reporte es una secuencia de filas uniformes lista para export CSV.

use serde::Serialize;

/// Artefacto generado: el identificador durable devuelto por el sink
#[derive(Debug, Clone, Serialize)]
pub struct ReportArtifact {
    pub filename: String,
}

/// Fila del reporte completo de flota
#[derive(Debug, Clone)]
pub struct FleetReportRow {
    pub plate: String,
    pub model: String,
    pub year: String,
    pub color: String,
    pub last_maintenance_at: String,
    pub days_since: String,
    pub status: String,
    pub last_kind: String,
    pub total_events: i64,
    pub registered_at: String,
    pub notes: String,
}

/// Fila del reporte de histórico
#[derive(Debug, Clone)]
pub struct HistoryReportRow {
    pub id: i64,
    pub plate: String,
    pub occurred_at: String,
    pub kind: String,
    pub technician: String,
    pub notes: String,
}

/// Fila del reporte de alertas
#[derive(Debug, Clone)]
pub struct AlertReportRow {
    pub plate: String,
    pub days_since: i64,
    pub level: String,
    pub last_kind: String,
    pub last_maintenance_at: String,
    pub priority: String,
}

/// Fila del reporte por tipo de mantenimiento
#[derive(Debug, Clone)]
pub struct TypeReportRow {
    pub kind: String,
    pub count: i64,
    pub percentage: String,
}
