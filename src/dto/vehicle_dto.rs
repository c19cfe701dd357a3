//! DTOs de vehículos

use serde::{Deserialize, Serialize};

use crate::models::maintenance::MaintenanceEvent;
use crate::models::status::StatusInfo;
use crate::models::vehicle::Vehicle;

/// Request para registrar un vehículo. La placa se normaliza a mayúsculas;
/// no se valida formato ni longitud.
#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub plate: String,
    pub model: Option<String>,
    pub year: Option<i64>,
    pub color: Option<String>,
    pub notes: Option<String>,
}

/// Vehículo con su estado de mantenimiento calculado
#[derive(Debug, Serialize)]
pub struct VehicleWithStatusResponse {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub status: StatusInfo,
}

/// Detalle de un vehículo: datos, estado y últimos eventos
#[derive(Debug, Serialize)]
pub struct VehicleDetailResponse {
    pub vehicle: Vehicle,
    pub status: StatusInfo,
    pub history: Vec<MaintenanceEvent>,
}
