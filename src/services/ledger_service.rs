//! Ledger de mantenimientos (camino de escritura)
//!
//! Invariante del ledger: insertar un evento y actualizar la caché
//! desnormalizada del vehículo ocurren en la misma transacción. Un lector
//! concurrente nunca observa un evento sin su actualización de caché.

use sqlx::SqlitePool;
use tracing::info;

use crate::dto::maintenance_dto::RecordMaintenanceRequest;
use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::maintenance::{MaintenanceEvent, DEFAULT_TECHNICIAN};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use crate::utils::time::{format_timestamp, now, parse_timestamp};

pub struct MaintenanceLedger {
    pool: SqlitePool,
}

impl MaintenanceLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Registra un vehículo nuevo. Una violación de unicidad de placa se
    /// traduce a `DuplicateVehicle`; el error crudo del store no escapa.
    pub async fn add_vehicle(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let plate = request.plate.to_uppercase();

        let result = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (plate, model, year, color, registered_at, notes)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING *
            "#,
        )
        .bind(&plate)
        .bind(&request.model)
        .bind(request.year)
        .bind(&request.color)
        .bind(format_timestamp(now()))
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(vehicle) => {
                info!("🚗 Vehículo registrado: {}", vehicle.plate);
                Ok(vehicle)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::DuplicateVehicle(plate))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Registra un mantenimiento. Si la placa no existe se crea un vehículo
    /// básico dentro de la misma transacción.
    ///
    /// La caché del vehículo se sobrescribe incondicionalmente con el evento
    /// recién insertado: `occurred_at` debe ser igual o posterior a cualquier
    /// evento previo de la placa para que la caché siga siendo exacta.
    pub async fn record_event(
        &self,
        request: RecordMaintenanceRequest,
    ) -> Result<MaintenanceEvent, AppError> {
        let plate = request.plate.to_uppercase();
        let occurred_at = match request.occurred_at {
            Some(raw) => {
                parse_timestamp(&raw)?;
                raw
            }
            None => format_timestamp(now()),
        };
        let technician = request
            .technician
            .unwrap_or_else(|| DEFAULT_TECHNICIAN.to_string());

        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT OR IGNORE INTO vehicles (plate, registered_at) VALUES (?1, ?2)")
            .bind(&plate)
            .bind(format_timestamp(now()))
            .execute(&mut *tx)
            .await?;

        let event = sqlx::query_as::<_, MaintenanceEvent>(
            r#"
            INSERT INTO maintenance_events (plate, occurred_at, kind, technician, notes)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING *
            "#,
        )
        .bind(&plate)
        .bind(&occurred_at)
        .bind(&request.kind)
        .bind(&technician)
        .bind(&request.notes)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE vehicles SET last_maintenance_at = ?1, last_maintenance_type = ?2 WHERE plate = ?3",
        )
        .bind(&event.occurred_at)
        .bind(&event.kind)
        .bind(&plate)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("🔧 Mantenimiento registrado: {} - {}", event.plate, event.kind);
        Ok(event)
    }
}
