//! Motor de analytics de flota
//!
//! Opera sobre un snapshot completo de vehículos y eventos tomado en un
//! instante; cada salida es computable de forma independiente. Los
//! timestamps almacenados que no parsean se saltan y quedan en el log,
//! nunca abortan un cálculo de flota.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use tracing::warn;

use crate::models::analytics::{
    AlertSeverity, DashboardAlert, DashboardAlertKind, DashboardData, FleetAlert, FleetAlerts,
    FleetKpis, Forecast, KindCount, RankingEntry, TrendSummary,
};
use crate::models::maintenance::MaintenanceEvent;
use crate::models::status::StatusTier;
use crate::models::vehicle::Vehicle;
use crate::services::status_service;
use crate::utils::time::parse_timestamp;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub struct AnalyticsEngine {
    vehicles: Vec<Vehicle>,
    events: Vec<MaintenanceEvent>,
    now: NaiveDateTime,
}

impl AnalyticsEngine {
    /// `vehicles` en orden de placa y `events` en orden cronológico, tal
    /// como los devuelven los repositorios.
    pub fn new(vehicles: Vec<Vehicle>, events: Vec<MaintenanceEvent>, now: NaiveDateTime) -> Self {
        Self {
            vehicles,
            events,
            now,
        }
    }

    /// Días sin mantenimiento de un vehículo, o `None` si no tiene fecha
    /// o la fecha almacenada no parsea (queda en el log)
    fn days_since(&self, vehicle: &Vehicle) -> Option<i64> {
        let raw = vehicle.last_maintenance_at.as_deref()?;
        match parse_timestamp(raw) {
            Ok(ts) => Some((self.now - ts).num_days()),
            Err(_) => {
                warn!("⚠️ Timestamp ilegible para {}, vehículo saltado", vehicle.plate);
                None
            }
        }
    }

    /// KPIs principales de la flota.
    ///
    /// Los conteos por franja solo consideran vehículos con mantenimiento
    /// registrado; `compliance_rate` se calcula sobre el total de la flota.
    pub fn kpis(&self) -> FleetKpis {
        let total_vehicles = self.vehicles.len() as i64;

        let mut ok_count = 0i64;
        let mut warning_count = 0i64;
        let mut critical_count = 0i64;
        let mut days_sum = 0i64;
        let mut dated = 0i64;

        for vehicle in &self.vehicles {
            if let Some(days) = self.days_since(vehicle) {
                dated += 1;
                days_sum += days;
                match status_service::tier_for_days(days) {
                    StatusTier::Ok => ok_count += 1,
                    StatusTier::Warning => warning_count += 1,
                    _ => critical_count += 1,
                }
            }
        }

        let compliance_rate = if total_vehicles > 0 {
            round1(ok_count as f64 / total_vehicles as f64 * 100.0)
        } else {
            0.0
        };
        let mean_days_since = if dated > 0 {
            round1(days_sum as f64 / dated as f64)
        } else {
            0.0
        };

        let mut events_this_month = 0i64;
        for event in &self.events {
            match parse_timestamp(&event.occurred_at) {
                Ok(ts) => {
                    if ts.month() == self.now.month() && ts.year() == self.now.year() {
                        events_this_month += 1;
                    }
                }
                Err(_) => warn!("⚠️ Evento {} con timestamp ilegible, saltado", event.id),
            }
        }

        FleetKpis {
            total_vehicles,
            ok_count,
            warning_count,
            critical_count,
            compliance_rate,
            mean_days_since,
            events_this_month,
            total_events: self.events.len() as i64,
        }
    }

    /// Tendencias: eventos por mes y top 5 de tipos.
    ///
    /// El bucket mensual solo cuenta eventos con fecha parseable; el conteo
    /// por tipo cuenta todos los eventos. El sort es estable: los empates
    /// conservan el orden de primera aparición.
    pub fn trends(&self) -> TrendSummary {
        let mut monthly = std::collections::BTreeMap::new();
        let mut kind_counts: HashMap<&str, i64> = HashMap::new();
        let mut kind_order: Vec<&str> = Vec::new();

        for event in &self.events {
            if let Ok(ts) = parse_timestamp(&event.occurred_at) {
                *monthly.entry(ts.format("%Y-%m").to_string()).or_insert(0) += 1;
            }

            let kind = event.kind.as_str();
            if !kind_counts.contains_key(kind) {
                kind_order.push(kind);
            }
            *kind_counts.entry(kind).or_insert(0) += 1;
        }

        let mut top_kinds: Vec<KindCount> = kind_order
            .into_iter()
            .map(|kind| KindCount {
                kind: kind.to_string(),
                count: kind_counts[kind],
            })
            .collect();
        top_kinds.sort_by(|a, b| b.count.cmp(&a.count));
        top_kinds.truncate(5);

        TrendSummary { monthly, top_kinds }
    }

    /// Previsión simple: media móvil de 7 días (ventana mínima 1) sobre los
    /// eventos por día, proyectada a la próxima semana. Con menos de 7
    /// eventos en total el resultado es `InsufficientData`.
    pub fn forecast(&self) -> Forecast {
        if self.events.len() < 7 {
            return Forecast::InsufficientData {
                message: "Insufficient data for forecasting".to_string(),
            };
        }

        let mut per_day: std::collections::BTreeMap<NaiveDate, i64> = std::collections::BTreeMap::new();
        for event in &self.events {
            if let Ok(ts) = parse_timestamp(&event.occurred_at) {
                *per_day.entry(ts.date()).or_insert(0) += 1;
            }
        }

        let counts: Vec<i64> = per_day.values().copied().collect();
        if counts.is_empty() {
            return Forecast::Projection {
                next_week_projection: 0,
                daily_mean: 0.0,
            };
        }

        // el último valor de la media móvil es la media de los últimos
        // min(7, n) días observados
        let start = counts.len().saturating_sub(7);
        let window = &counts[start..];
        let trailing_avg = window.iter().sum::<i64>() as f64 / window.len() as f64;
        let next_week_projection = (trailing_avg * 7.0).round() as i64;

        let daily_mean = round1(counts.iter().sum::<i64>() as f64 / counts.len() as f64);

        Forecast::Projection {
            next_week_projection,
            daily_mean,
        }
    }

    /// Top 10 de vehículos por cantidad de mantenimientos, descendente.
    /// Empates en orden de placa (orden del snapshot, sort estable).
    pub fn ranking(&self) -> Vec<RankingEntry> {
        let mut counts: HashMap<&str, i64> = HashMap::new();
        for event in &self.events {
            *counts.entry(event.plate.as_str()).or_insert(0) += 1;
        }

        let mut entries: Vec<RankingEntry> = self
            .vehicles
            .iter()
            .map(|vehicle| RankingEntry {
                plate: vehicle.plate.clone(),
                model: vehicle.model.clone(),
                total_events: counts.get(vehicle.plate.as_str()).copied().unwrap_or(0),
                last_maintenance_at: vehicle.last_maintenance_at.clone(),
            })
            .collect();

        entries.sort_by(|a, b| b.total_events.cmp(&a.total_events));
        entries.truncate(10);
        entries
    }

    /// Alertas de flota con la banda de 3 franjas: `warning` para 7..=13
    /// días, `critical` para más de 13. Alimenta el reporte de alertas y
    /// el endpoint de alertas del dashboard.
    pub fn fleet_alerts(&self) -> FleetAlerts {
        let mut warning = Vec::new();
        let mut critical = Vec::new();

        for vehicle in &self.vehicles {
            let Some(raw) = vehicle.last_maintenance_at.as_deref() else {
                continue;
            };
            let status = match status_service::classify(Some(raw), self.now) {
                Ok(status) => status,
                Err(_) => {
                    warn!("⚠️ Timestamp ilegible para {}, vehículo saltado", vehicle.plate);
                    continue;
                }
            };
            let Some(days) = status.days_since else {
                continue;
            };
            if days <= 6 {
                continue;
            }

            let severity = if days <= 13 {
                AlertSeverity::Warning
            } else {
                AlertSeverity::Critical
            };
            let alert = FleetAlert {
                plate: vehicle.plate.clone(),
                days_since: days,
                last_kind: vehicle.last_maintenance_type.clone(),
                last_maintenance_at: raw.to_string(),
                severity,
                message: status.message,
            };

            match severity {
                AlertSeverity::Warning => warning.push(alert),
                AlertSeverity::Critical => critical.push(alert),
            }
        }

        FleetAlerts { warning, critical }
    }

    /// Alertas del dashboard con la banda estricta: más de 20 días es
    /// `CRITICAL`, 14..=20 es `URGENT`. Top 5 ordenado por días descendente.
    /// Banda separada de `fleet_alerts`; ninguna reemplaza a la otra.
    pub fn dashboard_alerts(&self) -> Vec<DashboardAlert> {
        let mut alerts = Vec::new();

        for vehicle in &self.vehicles {
            let Some(days) = self.days_since(vehicle) else {
                continue;
            };

            if days > 20 {
                alerts.push(DashboardAlert {
                    plate: vehicle.plate.clone(),
                    days_since: days,
                    kind: DashboardAlertKind::Critical,
                    message: format!(
                        "Vehicle {} has gone {} days without maintenance!",
                        vehicle.plate, days
                    ),
                });
            } else if days > 13 {
                alerts.push(DashboardAlert {
                    plate: vehicle.plate.clone(),
                    days_since: days,
                    kind: DashboardAlertKind::Urgent,
                    message: format!("Vehicle {} needs URGENT maintenance!", vehicle.plate),
                });
            }
        }

        alerts.sort_by(|a, b| b.days_since.cmp(&a.days_since));
        alerts.truncate(5);
        alerts
    }

    /// Payload completo del dashboard
    pub fn dashboard_data(&self) -> DashboardData {
        DashboardData {
            kpis: self.kpis(),
            trends: self.trends(),
            forecast: self.forecast(),
            ranking: self.ranking(),
            alerts: self.dashboard_alerts(),
        }
    }
}
