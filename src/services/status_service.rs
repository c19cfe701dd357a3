//! Clasificador de estado de mantenimiento
//!
//! Función pura: mapea "días desde el último mantenimiento" a una franja.

use chrono::NaiveDateTime;

use crate::models::status::{StatusInfo, StatusTier};
use crate::utils::errors::AppError;
use crate::utils::time::parse_timestamp;

/// Franja para una cantidad de días sin mantenimiento. Días negativos
/// (timestamp en el futuro) clasifican como `ok`.
pub fn tier_for_days(days: i64) -> StatusTier {
    if days <= 6 {
        StatusTier::Ok
    } else if days <= 13 {
        StatusTier::Warning
    } else {
        StatusTier::Critical
    }
}

/// Clasifica un vehículo según su último mantenimiento.
///
/// Un timestamp ilegible devuelve `MalformedTimestamp`: quien recorre la
/// flota decide saltar ese registro en vez de abortar el cálculo completo.
pub fn classify(
    last_maintenance_at: Option<&str>,
    now: NaiveDateTime,
) -> Result<StatusInfo, AppError> {
    let Some(raw) = last_maintenance_at else {
        return Ok(StatusInfo {
            tier: StatusTier::Unknown,
            days_since: None,
            message: "No maintenance recorded".to_string(),
        });
    };

    let ts = parse_timestamp(raw)?;
    let days = (now - ts).num_days();
    let tier = tier_for_days(days);
    let message = match tier {
        StatusTier::Ok => format!("Up to date - {} days", days),
        StatusTier::Warning => format!("Attention - {} days", days),
        _ => format!("Critical - {} days", days),
    };

    Ok(StatusInfo {
        tier,
        days_since: Some(days),
        message,
    })
}

/// Clasificación tolerante para listados y reportes que conservan todas
/// las filas: un timestamp ilegible queda registrado en el log y el
/// vehículo se marca en franja `unknown`.
pub fn classify_lossy(
    plate: &str,
    last_maintenance_at: Option<&str>,
    now: NaiveDateTime,
) -> StatusInfo {
    match classify(last_maintenance_at, now) {
        Ok(info) => info,
        Err(_) => {
            tracing::warn!("⚠️ Timestamp ilegible para {}, registro marcado", plate);
            StatusInfo {
                tier: StatusTier::Unknown,
                days_since: None,
                message: "Unreadable maintenance date".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::format_timestamp;
    use chrono::{Duration, NaiveDate};

    fn reference_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn days_ago(days: i64) -> String {
        format_timestamp(reference_now() - Duration::days(days))
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_for_days(6), StatusTier::Ok);
        assert_eq!(tier_for_days(7), StatusTier::Warning);
        assert_eq!(tier_for_days(13), StatusTier::Warning);
        assert_eq!(tier_for_days(14), StatusTier::Critical);
    }

    #[test]
    fn test_future_timestamp_is_ok() {
        let status = classify(Some(&days_ago(-3)), reference_now()).unwrap();
        assert_eq!(status.tier, StatusTier::Ok);
        assert_eq!(status.days_since, Some(-3));
    }

    #[test]
    fn test_no_maintenance_is_unknown() {
        let status = classify(None, reference_now()).unwrap();
        assert_eq!(status.tier, StatusTier::Unknown);
        assert_eq!(status.days_since, None);
        assert_eq!(status.message, "No maintenance recorded");
    }

    #[test]
    fn test_partial_days_truncate() {
        // 6 días y 20 horas siguen siendo 6 días
        let raw = format_timestamp(reference_now() - Duration::days(6) - Duration::hours(20));
        let status = classify(Some(&raw), reference_now()).unwrap();
        assert_eq!(status.days_since, Some(6));
        assert_eq!(status.tier, StatusTier::Ok);
    }

    #[test]
    fn test_classify_accepts_both_formats() {
        let with_fraction = classify(Some("2026-08-01 00:00:00.250000"), reference_now()).unwrap();
        let plain = classify(Some("2026-08-01 00:00:00"), reference_now()).unwrap();
        assert_eq!(with_fraction.days_since, Some(6));
        assert_eq!(plain.days_since, Some(6));
    }

    #[test]
    fn test_classify_malformed_fails() {
        let err = classify(Some("not-a-date"), reference_now()).unwrap_err();
        assert!(matches!(err, AppError::MalformedTimestamp(_)));
    }

    #[test]
    fn test_classify_lossy_flags_malformed() {
        let status = classify_lossy("ABC1234", Some("not-a-date"), reference_now());
        assert_eq!(status.tier, StatusTier::Unknown);
    }
}
