use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::report_controller::ReportController;
use crate::dto::common::ApiResponse;
use crate::models::report::ReportArtifact;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/fleet", post(generate_fleet_report))
        .route("/history", post(generate_history_report))
        .route("/alerts", post(generate_alerts_report))
        .route("/by-type", post(generate_by_type_report))
}

fn controller(state: &AppState) -> ReportController {
    ReportController::new(state.pool.clone(), &state.config.exports_dir)
}

async fn generate_fleet_report(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ReportArtifact>>, AppError> {
    Ok(Json(controller(&state).fleet().await?))
}

async fn generate_history_report(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ReportArtifact>>, AppError> {
    Ok(Json(controller(&state).history().await?))
}

async fn generate_alerts_report(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ReportArtifact>>, AppError> {
    Ok(Json(controller(&state).alerts().await?))
}

async fn generate_by_type_report(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ReportArtifact>>, AppError> {
    Ok(Json(controller(&state).by_type().await?))
}
