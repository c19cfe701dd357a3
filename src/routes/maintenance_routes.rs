use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::common::ApiResponse;
use crate::dto::maintenance_dto::{HistoryQuery, RecordMaintenanceRequest};
use crate::models::maintenance::MaintenanceEvent;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(record_maintenance).get(list_history))
        .route("/kinds", get(list_kinds))
}

async fn record_maintenance(
    State(state): State<AppState>,
    Json(request): Json<RecordMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceEvent>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.record(request).await?;
    Ok(Json(response))
}

async fn list_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<MaintenanceEvent>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.history(query.plate, query.limit).await?;
    Ok(Json(response))
}

async fn list_kinds(State(state): State<AppState>) -> Json<Vec<String>> {
    let controller = MaintenanceController::new(state.pool.clone());
    Json(controller.kinds())
}
