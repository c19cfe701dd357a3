//! Tarea programada de snapshot
//!
//! Exporta periódicamente el reporte completo de flota en background. Un
//! fallo del export queda en el log y no afecta al ledger ni al resto de
//! la aplicación; la tarea solo lee, no retiene ningún lock.

use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::report_service::ReportGenerator;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::time;

pub fn spawn_snapshot_task(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = Duration::from_secs(state.config.snapshot_interval_hours * 3600);
        let mut interval = tokio::time::interval(period);
        // el primer tick de un interval es inmediato; lo consumimos para
        // exportar recién al cumplirse el primer período
        interval.tick().await;

        loop {
            interval.tick().await;
            match run_snapshot(&state).await {
                Ok(filename) => info!("📦 Snapshot periódico generado: {}", filename),
                Err(e) => error!("❌ Snapshot periódico falló: {}", e),
            }
        }
    })
}

async fn run_snapshot(state: &AppState) -> Result<String, AppError> {
    let vehicles = VehicleRepository::new(state.pool.clone()).list().await?;
    let events = MaintenanceRepository::new(state.pool.clone())
        .list_all()
        .await?;

    let generator = ReportGenerator::new(&state.config.exports_dir);
    let artifact = generator.full_fleet_report(&vehicles, &events, time::now())?;
    Ok(artifact.filename)
}
