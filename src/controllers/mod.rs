//! Controllers del sistema
//!
//! Orquestan repositorios y servicios por recurso; los handlers de rutas
//! solo extraen el request y delegan aquí.

pub mod dashboard_controller;
pub mod maintenance_controller;
pub mod report_controller;
pub mod vehicle_controller;
