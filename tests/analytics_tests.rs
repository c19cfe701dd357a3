//! Tests del motor de analytics sobre snapshots construidos a mano

use chrono::{Duration, NaiveDate, NaiveDateTime};
use fleet_maintenance::models::analytics::{DashboardAlertKind, Forecast};
use fleet_maintenance::models::maintenance::MaintenanceEvent;
use fleet_maintenance::models::vehicle::Vehicle;
use fleet_maintenance::services::analytics_service::AnalyticsEngine;
use fleet_maintenance::utils::time::format_timestamp;

fn reference_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 7)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn days_ago(days: i64) -> String {
    format_timestamp(reference_now() - Duration::days(days))
}

fn vehicle(id: i64, plate: &str, last_maintenance_at: Option<String>) -> Vehicle {
    Vehicle {
        id,
        plate: plate.to_string(),
        model: None,
        year: None,
        color: None,
        registered_at: days_ago(100),
        last_maintenance_type: last_maintenance_at.as_ref().map(|_| "OTHER".to_string()),
        last_maintenance_at,
        notes: None,
    }
}

fn event(id: i64, plate: &str, occurred_at: &str, kind: &str) -> MaintenanceEvent {
    MaintenanceEvent {
        id,
        plate: plate.to_string(),
        occurred_at: occurred_at.to_string(),
        kind: kind.to_string(),
        technician: "system".to_string(),
        notes: None,
    }
}

#[test]
fn test_kpis_empty_fleet() {
    let engine = AnalyticsEngine::new(vec![], vec![], reference_now());
    let kpis = engine.kpis();

    assert_eq!(kpis.total_vehicles, 0);
    assert_eq!(kpis.compliance_rate, 0.0);
    assert_eq!(kpis.mean_days_since, 0.0);
    assert_eq!(kpis.total_events, 0);
}

#[test]
fn test_kpis_tier_counts_and_compliance() {
    let vehicles = vec![
        vehicle(1, "AAA0001", Some(days_ago(2))),
        vehicle(2, "BBB0002", Some(days_ago(8))),
        vehicle(3, "CCC0003", Some(days_ago(20))),
        vehicle(4, "DDD0004", None),
    ];
    let engine = AnalyticsEngine::new(vehicles, vec![], reference_now());
    let kpis = engine.kpis();

    // el vehículo sin fecha cuenta en el total pero no en las franjas
    assert_eq!(kpis.total_vehicles, 4);
    assert_eq!(kpis.ok_count, 1);
    assert_eq!(kpis.warning_count, 1);
    assert_eq!(kpis.critical_count, 1);
    assert_eq!(kpis.compliance_rate, 25.0);
    assert_eq!(kpis.mean_days_since, 10.0);
}

#[test]
fn test_kpis_skip_malformed_timestamp() {
    let vehicles = vec![
        vehicle(1, "AAA0001", Some(days_ago(2))),
        vehicle(2, "BBB0002", Some("garbage".to_string())),
    ];
    let engine = AnalyticsEngine::new(vehicles, vec![], reference_now());
    let kpis = engine.kpis();

    assert_eq!(kpis.total_vehicles, 2);
    assert_eq!(kpis.ok_count, 1);
    assert_eq!(kpis.warning_count + kpis.critical_count, 0);
    assert_eq!(kpis.mean_days_since, 2.0);
}

#[test]
fn test_kpis_events_this_month() {
    let events = vec![
        event(1, "AAA0001", &days_ago(2), "OTHER"),
        event(2, "AAA0001", &days_ago(3), "OTHER"),
        event(3, "AAA0001", &days_ago(60), "OTHER"),
    ];
    let engine = AnalyticsEngine::new(vec![], events, reference_now());
    let kpis = engine.kpis();

    assert_eq!(kpis.events_this_month, 2);
    assert_eq!(kpis.total_events, 3);
}

#[test]
fn test_trends_monthly_buckets_and_top_kinds() {
    let events = vec![
        event(1, "AAA0001", "2026-07-01 10:00:00", "CAMERA RESET"),
        event(2, "AAA0001", "2026-07-15 10:00:00", "LENS CLEANING"),
        event(3, "AAA0001", "2026-08-01 10:00:00", "CAMERA RESET"),
        event(4, "AAA0001", "2026-08-02 10:00:00", "LENS CLEANING"),
        event(5, "AAA0001", "2026-08-03 10:00:00", "FIRMWARE UPDATE"),
    ];
    let engine = AnalyticsEngine::new(vec![], events, reference_now());
    let trends = engine.trends();

    assert_eq!(trends.monthly["2026-07"], 2);
    assert_eq!(trends.monthly["2026-08"], 3);

    // empate CAMERA RESET / LENS CLEANING: gana el de primera aparición
    assert_eq!(trends.top_kinds.len(), 3);
    assert_eq!(trends.top_kinds[0].kind, "CAMERA RESET");
    assert_eq!(trends.top_kinds[0].count, 2);
    assert_eq!(trends.top_kinds[1].kind, "LENS CLEANING");
    assert_eq!(trends.top_kinds[2].kind, "FIRMWARE UPDATE");
}

#[test]
fn test_forecast_insufficient_data() {
    let events: Vec<MaintenanceEvent> = (0..6)
        .map(|i| event(i, "AAA0001", &days_ago(i), "OTHER"))
        .collect();
    let engine = AnalyticsEngine::new(vec![], events, reference_now());

    assert!(matches!(engine.forecast(), Forecast::InsufficientData { .. }));
}

#[test]
fn test_forecast_with_exactly_seven_events() {
    // 7 eventos el mismo día: media móvil 7.0, proyección semanal 49
    let events: Vec<MaintenanceEvent> = (0..7)
        .map(|i| event(i, "AAA0001", "2026-08-01 10:00:00", "OTHER"))
        .collect();
    let engine = AnalyticsEngine::new(vec![], events, reference_now());

    match engine.forecast() {
        Forecast::Projection {
            next_week_projection,
            daily_mean,
        } => {
            assert_eq!(next_week_projection, 49);
            assert_eq!(daily_mean, 7.0);
        }
        Forecast::InsufficientData { .. } => panic!("expected a numeric projection"),
    }
}

#[test]
fn test_forecast_uses_trailing_window() {
    // 10 días con 1 evento por día: ventana de 7, media 1.0, proyección 7
    let events: Vec<MaintenanceEvent> = (0..10)
        .map(|i| event(i, "AAA0001", &days_ago(i), "OTHER"))
        .collect();
    let engine = AnalyticsEngine::new(vec![], events, reference_now());

    match engine.forecast() {
        Forecast::Projection {
            next_week_projection,
            daily_mean,
        } => {
            assert_eq!(next_week_projection, 7);
            assert_eq!(daily_mean, 1.0);
        }
        Forecast::InsufficientData { .. } => panic!("expected a numeric projection"),
    }
}

#[test]
fn test_ranking_caps_at_ten() {
    // 15 vehículos con conteos distintos: quedan los 10 mayores
    let mut vehicles = Vec::new();
    let mut events = Vec::new();
    let mut next_event_id = 0;
    for i in 0..15 {
        let plate = format!("VEH{:04}", i);
        vehicles.push(vehicle(i, &plate, None));
        for _ in 0..(15 - i) {
            events.push(event(next_event_id, &plate, &days_ago(1), "OTHER"));
            next_event_id += 1;
        }
    }
    let engine = AnalyticsEngine::new(vehicles, events, reference_now());
    let ranking = engine.ranking();

    assert_eq!(ranking.len(), 10);
    assert_eq!(ranking[0].plate, "VEH0000");
    assert_eq!(ranking[0].total_events, 15);
    assert_eq!(ranking[9].total_events, 6);
    assert!(ranking.iter().all(|entry| entry.total_events >= 6));
}

#[test]
fn test_ranking_ties_keep_plate_order() {
    let vehicles = vec![
        vehicle(1, "AAA0001", None),
        vehicle(2, "BBB0002", None),
        vehicle(3, "CCC0003", None),
    ];
    let events = vec![
        event(1, "BBB0002", &days_ago(1), "OTHER"),
        event(2, "CCC0003", &days_ago(2), "OTHER"),
    ];
    let engine = AnalyticsEngine::new(vehicles, events, reference_now());
    let ranking = engine.ranking();

    // BBB0002 y CCC0003 empatan con 1 evento: conservan el orden de placa
    assert_eq!(ranking[0].plate, "BBB0002");
    assert_eq!(ranking[1].plate, "CCC0003");
    assert_eq!(ranking[2].plate, "AAA0001");
}

#[test]
fn test_fleet_alerts_membership_at_boundaries() {
    let vehicles = vec![
        vehicle(1, "OK00006", Some(days_ago(6))),
        vehicle(2, "WRN0007", Some(days_ago(7))),
        vehicle(3, "WRN0013", Some(days_ago(13))),
        vehicle(4, "CRT0014", Some(days_ago(14))),
    ];
    let engine = AnalyticsEngine::new(vehicles, vec![], reference_now());
    let alerts = engine.fleet_alerts();

    let warning_plates: Vec<&str> = alerts.warning.iter().map(|a| a.plate.as_str()).collect();
    let critical_plates: Vec<&str> = alerts.critical.iter().map(|a| a.plate.as_str()).collect();

    assert_eq!(warning_plates, vec!["WRN0007", "WRN0013"]);
    assert_eq!(critical_plates, vec!["CRT0014"]);
}

#[test]
fn test_dashboard_alerts_strict_banding() {
    let vehicles = vec![
        vehicle(1, "FRESH01", Some(days_ago(10))),
        vehicle(2, "URGENT1", Some(days_ago(15))),
        vehicle(3, "CRITIC1", Some(days_ago(21))),
    ];
    let engine = AnalyticsEngine::new(vehicles, vec![], reference_now());
    let alerts = engine.dashboard_alerts();

    // la banda estricta empieza en 14 días; a 10 días no hay alerta
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].plate, "CRITIC1");
    assert_eq!(alerts[0].kind, DashboardAlertKind::Critical);
    assert_eq!(alerts[1].plate, "URGENT1");
    assert_eq!(alerts[1].kind, DashboardAlertKind::Urgent);
}

#[test]
fn test_dashboard_alerts_top_five_by_days() {
    let vehicles: Vec<Vehicle> = (0..8)
        .map(|i| vehicle(i, &format!("OLD{:04}", i), Some(days_ago(30 + i))))
        .collect();
    let engine = AnalyticsEngine::new(vehicles, vec![], reference_now());
    let alerts = engine.dashboard_alerts();

    assert_eq!(alerts.len(), 5);
    assert_eq!(alerts[0].days_since, 37);
    assert!(alerts.windows(2).all(|w| w[0].days_since >= w[1].days_since));
}
