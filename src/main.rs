use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use fleet_maintenance::config::environment::EnvironmentConfig;
use fleet_maintenance::database::connection::{create_pool, init_schema};
use fleet_maintenance::middleware::cors::cors_middleware;
use fleet_maintenance::routes;
use fleet_maintenance::services::snapshot_task::spawn_snapshot_task;
use fleet_maintenance::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚐 Fleet Maintenance Tracker - API");
    info!("==================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match create_pool(Some(&config.database_url)).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    init_schema(&pool).await?;
    info!("✅ Base de datos inicializada");

    let state = AppState::new(pool, config.clone());

    // Tarea periódica de snapshot (solo lectura, fallos no propagan)
    let _snapshot_task = spawn_snapshot_task(state.clone());

    let app = routes::create_app(state)
        .layer(cors_middleware())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /status - Estado de la API");
    info!("🚗 Vehículos:");
    info!("   POST /api/vehicle - Registrar vehículo");
    info!("   GET  /api/vehicle - Listar vehículos con estado");
    info!("   GET  /api/vehicle/:plate - Detalle de vehículo");
    info!("🔧 Mantenimientos:");
    info!("   POST /api/maintenance - Registrar mantenimiento");
    info!("   GET  /api/maintenance - Histórico de mantenimientos");
    info!("   GET  /api/maintenance/kinds - Catálogo de tipos");
    info!("📊 Dashboard:");
    info!("   GET  /api/dashboard - Datos completos del dashboard");
    info!("   GET  /api/dashboard/kpis - KPIs de flota");
    info!("   GET  /api/dashboard/alerts - Alertas de flota");
    info!("📄 Reportes:");
    info!("   POST /api/report/fleet - Reporte completo de flota");
    info!("   POST /api/report/history - Reporte de histórico");
    info!("   POST /api/report/alerts - Reporte de alertas");
    info!("   POST /api/report/by-type - Reporte por tipo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
