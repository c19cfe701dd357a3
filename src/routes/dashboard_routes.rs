use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::models::analytics::{DashboardData, FleetAlerts, FleetKpis};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_data))
        .route("/kpis", get(dashboard_kpis))
        .route("/alerts", get(dashboard_alerts))
}

async fn dashboard_data(
    State(state): State<AppState>,
) -> Result<Json<DashboardData>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.data().await?;
    Ok(Json(response))
}

async fn dashboard_kpis(State(state): State<AppState>) -> Result<Json<FleetKpis>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.kpis().await?;
    Ok(Json(response))
}

async fn dashboard_alerts(
    State(state): State<AppState>,
) -> Result<Json<FleetAlerts>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.alerts().await?;
    Ok(Json(response))
}
