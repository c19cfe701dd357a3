//! Repositorio de mantenimientos
//!
//! Consultas de lectura sobre la tabla `maintenance_events`.

use sqlx::SqlitePool;

use crate::models::maintenance::MaintenanceEvent;
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    pool: SqlitePool,
}

impl MaintenanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Histórico más reciente primero, opcionalmente filtrado por placa
    pub async fn history(
        &self,
        plate: Option<&str>,
        limit: i64,
    ) -> Result<Vec<MaintenanceEvent>, AppError> {
        let events = match plate {
            Some(plate) => {
                sqlx::query_as::<_, MaintenanceEvent>(
                    r#"
                    SELECT * FROM maintenance_events
                    WHERE plate = ?1
                    ORDER BY occurred_at DESC
                    LIMIT ?2
                    "#,
                )
                .bind(plate.to_uppercase())
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, MaintenanceEvent>(
                    r#"
                    SELECT * FROM maintenance_events
                    ORDER BY occurred_at DESC
                    LIMIT ?1
                    "#,
                )
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(events)
    }

    /// Snapshot completo en orden cronológico, para el motor de analytics
    pub async fn list_all(&self) -> Result<Vec<MaintenanceEvent>, AppError> {
        let events = sqlx::query_as::<_, MaintenanceEvent>(
            "SELECT * FROM maintenance_events ORDER BY occurred_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}
