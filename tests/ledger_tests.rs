//! Tests de integración del ledger sobre un store en memoria

use fleet_maintenance::database::connection::create_memory_pool;
use fleet_maintenance::dto::maintenance_dto::RecordMaintenanceRequest;
use fleet_maintenance::dto::vehicle_dto::CreateVehicleRequest;
use fleet_maintenance::repositories::maintenance_repository::MaintenanceRepository;
use fleet_maintenance::repositories::vehicle_repository::VehicleRepository;
use fleet_maintenance::services::ledger_service::MaintenanceLedger;
use fleet_maintenance::utils::errors::AppError;

fn record_request(plate: &str, kind: &str, occurred_at: Option<&str>) -> RecordMaintenanceRequest {
    RecordMaintenanceRequest {
        plate: plate.to_string(),
        kind: kind.to_string(),
        technician: None,
        notes: None,
        occurred_at: occurred_at.map(|s| s.to_string()),
    }
}

fn create_request(plate: &str) -> CreateVehicleRequest {
    CreateVehicleRequest {
        plate: plate.to_string(),
        model: Some("Sprinter".to_string()),
        year: Some(2021),
        color: None,
        notes: None,
    }
}

#[tokio::test]
async fn test_record_event_creates_missing_vehicle() {
    let pool = create_memory_pool().await.unwrap();
    let ledger = MaintenanceLedger::new(pool.clone());

    let event = ledger
        .record_event(record_request("abc1234", "LENS CLEANING", None))
        .await
        .unwrap();

    assert_eq!(event.plate, "ABC1234");
    assert_eq!(event.technician, "system");

    // el vehículo se creó en el mismo paso y su caché apunta al evento
    let vehicle = VehicleRepository::new(pool)
        .find_by_plate("abc1234")
        .await
        .unwrap()
        .expect("vehicle should have been created");
    assert_eq!(
        vehicle.last_maintenance_at.as_deref(),
        Some(event.occurred_at.as_str())
    );
    assert_eq!(vehicle.last_maintenance_type.as_deref(), Some("LENS CLEANING"));
}

#[tokio::test]
async fn test_cache_follows_latest_event() {
    let pool = create_memory_pool().await.unwrap();
    let ledger = MaintenanceLedger::new(pool.clone());

    ledger
        .record_event(record_request(
            "DEF5678",
            "CAMERA RESET",
            Some("2026-08-01 10:00:00"),
        ))
        .await
        .unwrap();
    ledger
        .record_event(record_request(
            "DEF5678",
            "FIRMWARE UPDATE",
            Some("2026-08-05 10:00:00.250000"),
        ))
        .await
        .unwrap();

    let vehicle = VehicleRepository::new(pool)
        .find_by_plate("DEF5678")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        vehicle.last_maintenance_at.as_deref(),
        Some("2026-08-05 10:00:00.250000")
    );
    assert_eq!(
        vehicle.last_maintenance_type.as_deref(),
        Some("FIRMWARE UPDATE")
    );
}

#[tokio::test]
async fn test_duplicate_plate_is_distinguishable() {
    let pool = create_memory_pool().await.unwrap();
    let ledger = MaintenanceLedger::new(pool);

    ledger.add_vehicle(create_request("GHI9012")).await.unwrap();

    // misma placa en otra caja: la identidad es case-insensitive
    let err = ledger
        .add_vehicle(create_request("ghi9012"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateVehicle(plate) if plate == "GHI9012"));
}

#[tokio::test]
async fn test_event_ids_are_monotonic() {
    let pool = create_memory_pool().await.unwrap();
    let ledger = MaintenanceLedger::new(pool);

    let first = ledger
        .record_event(record_request("JKL3456", "OTHER", None))
        .await
        .unwrap();
    let second = ledger
        .record_event(record_request("JKL3456", "OTHER", None))
        .await
        .unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_record_event_rejects_malformed_timestamp() {
    let pool = create_memory_pool().await.unwrap();
    let ledger = MaintenanceLedger::new(pool.clone());

    let err = ledger
        .record_event(record_request("MNO7890", "OTHER", Some("07/08/2026")))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MalformedTimestamp(_)));

    // nada quedó escrito
    let events = MaintenanceRepository::new(pool)
        .history(None, 10)
        .await
        .unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_history_is_most_recent_first_and_limited() {
    let pool = create_memory_pool().await.unwrap();
    let ledger = MaintenanceLedger::new(pool.clone());

    for day in 1..=5 {
        ledger
            .record_event(record_request(
                "PQR1122",
                "FUNCTION TEST",
                Some(&format!("2026-08-0{} 09:00:00", day)),
            ))
            .await
            .unwrap();
    }

    let repo = MaintenanceRepository::new(pool);
    let history = repo.history(Some("pqr1122"), 3).await.unwrap();

    assert_eq!(history.len(), 3);
    assert_eq!(history[0].occurred_at, "2026-08-05 09:00:00");
    assert_eq!(history[2].occurred_at, "2026-08-03 09:00:00");
}
