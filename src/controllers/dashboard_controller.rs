//! Controller del dashboard
//!
//! Toma un snapshot de vehículos y eventos y construye el motor de
//! analytics por request; el motor se inyecta con el snapshot completo
//! en vez de consultar el store por su cuenta.

use sqlx::SqlitePool;

use crate::models::analytics::{DashboardData, FleetAlerts, FleetKpis};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::analytics_service::AnalyticsEngine;
use crate::utils::errors::AppError;
use crate::utils::time;

pub struct DashboardController {
    vehicles: VehicleRepository,
    maintenances: MaintenanceRepository,
}

impl DashboardController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            maintenances: MaintenanceRepository::new(pool),
        }
    }

    async fn engine(&self) -> Result<AnalyticsEngine, AppError> {
        let vehicles = self.vehicles.list().await?;
        let events = self.maintenances.list_all().await?;
        Ok(AnalyticsEngine::new(vehicles, events, time::now()))
    }

    pub async fn data(&self) -> Result<DashboardData, AppError> {
        Ok(self.engine().await?.dashboard_data())
    }

    pub async fn kpis(&self) -> Result<FleetKpis, AppError> {
        Ok(self.engine().await?.kpis())
    }

    /// Alertas con la banda de 3 franjas (7/14); el payload del dashboard
    /// lleva la banda estricta (14/20) en `DashboardData.alerts`
    pub async fn alerts(&self) -> Result<FleetAlerts, AppError> {
        Ok(self.engine().await?.fleet_alerts())
    }
}
