//! Controller de vehículos

use sqlx::SqlitePool;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, VehicleDetailResponse, VehicleWithStatusResponse,
};
use crate::models::vehicle::Vehicle;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::ledger_service::MaintenanceLedger;
use crate::services::status_service;
use crate::utils::errors::AppError;
use crate::utils::time;

/// Cantidad de eventos incluidos en el detalle de un vehículo
const DETAIL_HISTORY_LIMIT: i64 = 10;

pub struct VehicleController {
    ledger: MaintenanceLedger,
    vehicles: VehicleRepository,
    maintenances: MaintenanceRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            ledger: MaintenanceLedger::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            maintenances: MaintenanceRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        let vehicle = self.ledger.add_vehicle(request).await?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo registrado exitosamente".to_string(),
        ))
    }

    /// Lista la flota con el estado calculado de cada vehículo
    pub async fn list_with_status(&self) -> Result<Vec<VehicleWithStatusResponse>, AppError> {
        let now = time::now();
        let vehicles = self.vehicles.list().await?;

        let response = vehicles
            .into_iter()
            .map(|vehicle| {
                let status = status_service::classify_lossy(
                    &vehicle.plate,
                    vehicle.last_maintenance_at.as_deref(),
                    now,
                );
                VehicleWithStatusResponse { vehicle, status }
            })
            .collect();

        Ok(response)
    }

    pub async fn detail(&self, plate: &str) -> Result<VehicleDetailResponse, AppError> {
        let vehicle = self
            .vehicles
            .find_by_plate(plate)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let status = status_service::classify_lossy(
            &vehicle.plate,
            vehicle.last_maintenance_at.as_deref(),
            time::now(),
        );
        let history = self
            .maintenances
            .history(Some(&vehicle.plate), DETAIL_HISTORY_LIMIT)
            .await?;

        Ok(VehicleDetailResponse {
            vehicle,
            status,
            history,
        })
    }
}
