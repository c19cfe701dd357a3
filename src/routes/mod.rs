//! Rutas de la API
//!
//! Un router por recurso, anidados bajo `/api`.

pub mod dashboard_routes;
pub mod maintenance_routes;
pub mod report_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

/// Ensambla la aplicación completa (sin layers; `main` agrega CORS y trace)
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status_endpoint))
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest(
            "/api/maintenance",
            maintenance_routes::create_maintenance_router(),
        )
        .nest(
            "/api/dashboard",
            dashboard_routes::create_dashboard_router(),
        )
        .nest("/api/report", report_routes::create_report_router())
        .with_state(state)
}

/// Estado de la API
async fn status_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "online",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
