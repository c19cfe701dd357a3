//! Generador de reportes tabulares
//!
//! Ensambla las salidas del motor de analytics y el detalle por vehículo
//! en cuatro reportes CSV. Cada artefacto es inmutable y lleva un
//! timestamp UTC en el nombre; regenerar nunca toca un artefacto previo.

use chrono::{NaiveDateTime, Utc};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::models::analytics::FleetAlerts;
use crate::models::maintenance::MaintenanceEvent;
use crate::models::report::{
    AlertReportRow, FleetReportRow, HistoryReportRow, ReportArtifact, TypeReportRow,
};
use crate::models::vehicle::Vehicle;
use crate::services::analytics_service::AnalyticsEngine;
use crate::services::status_service;
use crate::utils::errors::AppError;

/// Tope de filas del reporte de histórico
pub const HISTORY_REPORT_LIMIT: i64 = 10_000;

/// Escapa un campo CSV si contiene separadores, comillas o saltos de línea
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| csv_escape(f))
        .collect::<Vec<_>>()
        .join(",")
}

pub struct ReportGenerator {
    exports_dir: PathBuf,
}

impl ReportGenerator {
    pub fn new(exports_dir: impl Into<PathBuf>) -> Self {
        Self {
            exports_dir: exports_dir.into(),
        }
    }

    /// Ruta de un artefacto nuevo: `<stem>_<UTC %Y%m%d_%H%M%S>.csv`.
    /// Un artefacto previo nunca se reescribe; ante colisión dentro del
    /// mismo segundo se agrega un sufijo numérico.
    fn artifact_path(&self, stem: &str) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.exports_dir)?;
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");

        let mut path = self.exports_dir.join(format!("{}_{}.csv", stem, timestamp));
        let mut attempt = 1;
        while path.exists() {
            path = self
                .exports_dir
                .join(format!("{}_{}_{}.csv", stem, timestamp, attempt));
            attempt += 1;
        }

        Ok(path)
    }

    fn write_artifact(&self, stem: &str, lines: Vec<String>) -> Result<ReportArtifact, AppError> {
        let path = self.artifact_path(stem)?;
        fs::write(&path, lines.join("\n") + "\n")?;

        let filename = path.to_string_lossy().to_string();
        info!("📄 Reporte generado: {}", filename);
        Ok(ReportArtifact { filename })
    }

    /// Reporte completo de flota: una fila por vehículo más un bloque de
    /// resumen con el snapshot de KPIs. Un vehículo con fecha ilegible se
    /// marca en franja `unknown` con los días vacíos; ninguna fila se pierde.
    pub fn full_fleet_report(
        &self,
        vehicles: &[Vehicle],
        events: &[MaintenanceEvent],
        now: NaiveDateTime,
    ) -> Result<ReportArtifact, AppError> {
        let mut counts = std::collections::HashMap::new();
        for event in events {
            *counts.entry(event.plate.as_str()).or_insert(0i64) += 1;
        }

        let rows: Vec<FleetReportRow> = vehicles
            .iter()
            .map(|vehicle| {
                let status = status_service::classify_lossy(
                    &vehicle.plate,
                    vehicle.last_maintenance_at.as_deref(),
                    now,
                );
                FleetReportRow {
                    plate: vehicle.plate.clone(),
                    model: vehicle.model.clone().unwrap_or_else(|| "N/A".to_string()),
                    year: vehicle
                        .year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "N/A".to_string()),
                    color: vehicle.color.clone().unwrap_or_else(|| "N/A".to_string()),
                    last_maintenance_at: vehicle
                        .last_maintenance_at
                        .clone()
                        .unwrap_or_else(|| "Never".to_string()),
                    days_since: status
                        .days_since
                        .map(|d| d.to_string())
                        .unwrap_or_default(),
                    status: status.tier.label().to_uppercase(),
                    last_kind: vehicle
                        .last_maintenance_type
                        .clone()
                        .unwrap_or_else(|| "N/A".to_string()),
                    total_events: counts.get(vehicle.plate.as_str()).copied().unwrap_or(0),
                    registered_at: vehicle.registered_at.clone(),
                    notes: vehicle.notes.clone().unwrap_or_default(),
                }
            })
            .collect();

        let kpis =
            AnalyticsEngine::new(vehicles.to_vec(), events.to_vec(), now).kpis();

        let mut lines = vec![
            "Plate,Model,Year,Color,Last Maintenance,Days Without Maintenance,Status,Last Kind,Total Events,Registered At,Notes"
                .to_string(),
        ];
        for row in &rows {
            lines.push(csv_line(&[
                row.plate.clone(),
                row.model.clone(),
                row.year.clone(),
                row.color.clone(),
                row.last_maintenance_at.clone(),
                row.days_since.clone(),
                row.status.clone(),
                row.last_kind.clone(),
                row.total_events.to_string(),
                row.registered_at.clone(),
                row.notes.clone(),
            ]));
        }

        // bloque de resumen, separado por una línea en blanco
        lines.push(String::new());
        lines.push("Indicator,Value".to_string());
        lines.push(format!("Total Vehicles,{}", kpis.total_vehicles));
        lines.push(format!("Vehicles Ok,{}", kpis.ok_count));
        lines.push(format!("Vehicles In Warning,{}", kpis.warning_count));
        lines.push(format!("Vehicles Critical,{}", kpis.critical_count));
        lines.push(format!("Total Events,{}", kpis.total_events));
        lines.push(format!("Mean Days Without Maintenance,{}", kpis.mean_days_since));

        self.write_artifact("fleet_report", lines)
    }

    /// Histórico completo, más reciente primero. `events` llega ya ordenado
    /// y acotado a `HISTORY_REPORT_LIMIT` por el repositorio.
    pub fn history_report(
        &self,
        events: &[MaintenanceEvent],
    ) -> Result<ReportArtifact, AppError> {
        if events.is_empty() {
            return Err(AppError::NotFound(
                "No hay histórico de mantenimientos".to_string(),
            ));
        }

        let rows: Vec<HistoryReportRow> = events
            .iter()
            .map(|event| HistoryReportRow {
                id: event.id,
                plate: event.plate.clone(),
                occurred_at: event.occurred_at.clone(),
                kind: event.kind.clone(),
                technician: event.technician.clone(),
                notes: event.notes.clone().unwrap_or_default(),
            })
            .collect();

        let mut lines = vec!["ID,Plate,Date,Kind,Technician,Notes".to_string()];
        for row in &rows {
            lines.push(csv_line(&[
                row.id.to_string(),
                row.plate.clone(),
                row.occurred_at.clone(),
                row.kind.clone(),
                row.technician.clone(),
                row.notes.clone(),
            ]));
        }

        self.write_artifact("maintenance_history", lines)
    }

    /// Reporte solo de alertas: primero la lista de warning, después la de
    /// critical (agrupación natural de la banda de 3 franjas).
    pub fn alerts_report(&self, alerts: &FleetAlerts) -> Result<ReportArtifact, AppError> {
        let mut rows = Vec::new();

        for alert in &alerts.warning {
            rows.push(AlertReportRow {
                plate: alert.plate.clone(),
                days_since: alert.days_since,
                level: "WARNING".to_string(),
                last_kind: alert.last_kind.clone().unwrap_or_else(|| "N/A".to_string()),
                last_maintenance_at: alert.last_maintenance_at.clone(),
                priority: "medium".to_string(),
            });
        }
        for alert in &alerts.critical {
            rows.push(AlertReportRow {
                plate: alert.plate.clone(),
                days_since: alert.days_since,
                level: "CRITICAL".to_string(),
                last_kind: alert.last_kind.clone().unwrap_or_else(|| "N/A".to_string()),
                last_maintenance_at: alert.last_maintenance_at.clone(),
                priority: "high".to_string(),
            });
        }

        let mut lines =
            vec!["Plate,Days Without Maintenance,Level,Last Kind,Last Date,Priority".to_string()];
        for row in &rows {
            lines.push(csv_line(&[
                row.plate.clone(),
                row.days_since.to_string(),
                row.level.clone(),
                row.last_kind.clone(),
                row.last_maintenance_at.clone(),
                row.priority.clone(),
            ]));
        }

        self.write_artifact("alerts", lines)
    }

    /// Reporte por tipo de mantenimiento: conteo y porcentaje del total,
    /// ordenado por conteo descendente.
    pub fn by_type_report(
        &self,
        events: &[MaintenanceEvent],
    ) -> Result<ReportArtifact, AppError> {
        let total = events.len() as i64;
        let mut counts: std::collections::HashMap<&str, i64> = std::collections::HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for event in events {
            let kind = event.kind.as_str();
            if !counts.contains_key(kind) {
                order.push(kind);
            }
            *counts.entry(kind).or_insert(0) += 1;
        }

        let mut rows: Vec<TypeReportRow> = order
            .into_iter()
            .map(|kind| {
                let count = counts[kind];
                let percentage = if total > 0 {
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                };
                TypeReportRow {
                    kind: kind.to_string(),
                    count,
                    percentage: format!("{:.1}%", percentage),
                }
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count));

        let mut lines = vec!["Maintenance Kind,Count,Percentage".to_string()];
        for row in &rows {
            lines.push(csv_line(&[
                row.kind.clone(),
                row.count.to_string(),
                row.percentage.clone(),
            ]));
        }

        self.write_artifact("by_type", lines)
    }
}
