//! Repositorios de acceso a datos
//!
//! Este módulo contiene las consultas de lectura sobre el store. El camino
//! de escritura (vehículos y eventos) pertenece al ledger en `services`.

pub mod maintenance_repository;
pub mod vehicle_repository;
