//! Repositorio de vehículos
//!
//! Consultas de lectura sobre la tabla `vehicles`. Toda búsqueda por placa
//! normaliza a mayúsculas antes de consultar.

use sqlx::SqlitePool;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE plate = ?1")
            .bind(plate.to_uppercase())
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY plate")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }
}
