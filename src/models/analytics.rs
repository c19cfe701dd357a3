//! Modelos de Analytics
//!
//! Este módulo contiene los modelos para KPIs de flota, tendencias,
//! previsiones, ranking y alertas del dashboard.

use serde::Serialize;
use std::collections::BTreeMap;

/// KPIs principales de la flota
#[derive(Debug, Clone, Serialize)]
pub struct FleetKpis {
    pub total_vehicles: i64,
    pub ok_count: i64,
    pub warning_count: i64,
    pub critical_count: i64,
    /// Porcentaje de vehículos en franja `ok` sobre el total, 1 decimal
    pub compliance_rate: f64,
    /// Media de días sin mantenimiento sobre vehículos con fecha, 1 decimal
    pub mean_days_since: f64,
    pub events_this_month: i64,
    pub total_events: i64,
}

/// Conteo de eventos por tipo
#[derive(Debug, Clone, Serialize)]
pub struct KindCount {
    pub kind: String,
    pub count: i64,
}

/// Tendencias de mantenimiento
#[derive(Debug, Clone, Serialize)]
pub struct TrendSummary {
    /// Eventos por bucket `YYYY-MM`, ordenado cronológicamente
    pub monthly: BTreeMap<String, i64>,
    /// Top 5 tipos por frecuencia; empates en orden de primera aparición
    pub top_kinds: Vec<KindCount>,
}

/// Previsión simple basada en el histórico de eventos
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Forecast {
    /// Menos de 7 eventos registrados: resultado normal, no un error
    InsufficientData { message: String },
    Projection {
        /// Media móvil de 7 días proyectada a la próxima semana
        next_week_projection: i64,
        /// Media de eventos por día observado, 1 decimal
        daily_mean: f64,
    },
}

/// Entrada del ranking de vehículos por cantidad de mantenimientos
#[derive(Debug, Clone, Serialize)]
pub struct RankingEntry {
    pub plate: String,
    pub model: Option<String>,
    pub total_events: i64,
    pub last_maintenance_at: Option<String>,
}

/// Severidad de una alerta de flota (banda de 3 franjas: 7/14 días)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// Alerta de flota: vehículo fuera de la franja `ok`
#[derive(Debug, Clone, Serialize)]
pub struct FleetAlert {
    pub plate: String,
    pub days_since: i64,
    pub last_kind: Option<String>,
    pub last_maintenance_at: String,
    pub severity: AlertSeverity,
    pub message: String,
}

/// Alertas de flota agrupadas por severidad
#[derive(Debug, Clone, Serialize)]
pub struct FleetAlerts {
    pub warning: Vec<FleetAlert>,
    pub critical: Vec<FleetAlert>,
}

/// Nivel de una alerta del dashboard (banda estricta: 14/20 días).
/// Es una banda distinta a la de `FleetAlert` y no la reemplaza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DashboardAlertKind {
    Urgent,
    Critical,
}

/// Alerta del dashboard, banda estricta
#[derive(Debug, Clone, Serialize)]
pub struct DashboardAlert {
    pub plate: String,
    pub days_since: i64,
    pub kind: DashboardAlertKind,
    pub message: String,
}

/// Payload completo del dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub kpis: FleetKpis,
    pub trends: TrendSummary,
    pub forecast: Forecast,
    pub ranking: Vec<RankingEntry>,
    pub alerts: Vec<DashboardAlert>,
}
