//! Controller de reportes

use sqlx::SqlitePool;

use crate::dto::common::ApiResponse;
use crate::models::report::ReportArtifact;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::analytics_service::AnalyticsEngine;
use crate::services::report_service::{ReportGenerator, HISTORY_REPORT_LIMIT};
use crate::utils::errors::AppError;
use crate::utils::time;

pub struct ReportController {
    vehicles: VehicleRepository,
    maintenances: MaintenanceRepository,
    generator: ReportGenerator,
}

impl ReportController {
    pub fn new(pool: SqlitePool, exports_dir: &str) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            maintenances: MaintenanceRepository::new(pool),
            generator: ReportGenerator::new(exports_dir),
        }
    }

    pub async fn fleet(&self) -> Result<ApiResponse<ReportArtifact>, AppError> {
        let vehicles = self.vehicles.list().await?;
        let events = self.maintenances.list_all().await?;
        let artifact = self
            .generator
            .full_fleet_report(&vehicles, &events, time::now())?;

        Ok(ApiResponse::success(artifact))
    }

    pub async fn history(&self) -> Result<ApiResponse<ReportArtifact>, AppError> {
        let events = self
            .maintenances
            .history(None, HISTORY_REPORT_LIMIT)
            .await?;
        let artifact = self.generator.history_report(&events)?;

        Ok(ApiResponse::success(artifact))
    }

    pub async fn alerts(&self) -> Result<ApiResponse<ReportArtifact>, AppError> {
        let vehicles = self.vehicles.list().await?;
        let events = self.maintenances.list_all().await?;
        let alerts = AnalyticsEngine::new(vehicles, events, time::now()).fleet_alerts();
        let artifact = self.generator.alerts_report(&alerts)?;

        Ok(ApiResponse::success(artifact))
    }

    pub async fn by_type(&self) -> Result<ApiResponse<ReportArtifact>, AppError> {
        let events = self.maintenances.list_all().await?;
        let artifact = self.generator.by_type_report(&events)?;

        Ok(ApiResponse::success(artifact))
    }
}
