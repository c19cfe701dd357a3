//! Services module
//!
//! Este módulo contiene la lógica de negocio: el clasificador de estado,
//! el ledger de escritura, el motor de analytics, el generador de
//! reportes y la tarea periódica de snapshot.

pub mod analytics_service;
pub mod ledger_service;
pub mod report_service;
pub mod snapshot_task;
pub mod status_service;
