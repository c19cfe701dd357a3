//! Utilidades de fechas y timestamps
//!
//! Los timestamps se persisten como TEXT en dos formatos históricos:
//! con fracción de segundo y sin ella. El parseo intenta ambos en orden
//! y falla con `MalformedTimestamp` si ninguno aplica.

use chrono::{NaiveDateTime, Utc};

use crate::utils::errors::AppError;

/// Formato persistido con fracción de segundo
pub const FORMAT_WITH_FRACTION: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Formato persistido sin fracción de segundo
pub const FORMAT_PLAIN: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp actual en UTC, naive, tal como se persiste
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Formatea un timestamp al formato de persistencia (con fracción)
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// Parsea un timestamp almacenado: primero el formato con fracción,
/// después el formato sin fracción
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(raw, FORMAT_WITH_FRACTION)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, FORMAT_PLAIN))
        .map_err(|_| AppError::MalformedTimestamp(raw.to_string()))
}
