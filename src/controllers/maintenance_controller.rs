//! Controller de mantenimientos

use sqlx::SqlitePool;

use crate::dto::common::ApiResponse;
use crate::dto::maintenance_dto::RecordMaintenanceRequest;
use crate::models::maintenance::{MaintenanceEvent, MAINTENANCE_KINDS};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::services::ledger_service::MaintenanceLedger;
use crate::utils::errors::AppError;

/// Límite por defecto del histórico
const DEFAULT_HISTORY_LIMIT: i64 = 100;

pub struct MaintenanceController {
    ledger: MaintenanceLedger,
    maintenances: MaintenanceRepository,
}

impl MaintenanceController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            ledger: MaintenanceLedger::new(pool.clone()),
            maintenances: MaintenanceRepository::new(pool),
        }
    }

    pub async fn record(
        &self,
        request: RecordMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceEvent>, AppError> {
        let event = self.ledger.record_event(request).await?;

        Ok(ApiResponse::success_with_message(
            event,
            "Mantenimiento registrado exitosamente".to_string(),
        ))
    }

    pub async fn history(
        &self,
        plate: Option<String>,
        limit: Option<i64>,
    ) -> Result<Vec<MaintenanceEvent>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        self.maintenances.history(plate.as_deref(), limit).await
    }

    /// Catálogo de tipos conocidos (el campo sigue siendo abierto)
    pub fn kinds(&self) -> Vec<String> {
        MAINTENANCE_KINDS.iter().map(|k| k.to_string()).collect()
    }
}
