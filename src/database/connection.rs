//! Conexión a SQLite
//!
//! Este módulo maneja el pool de conexiones y la creación del schema.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const CREATE_VEHICLES: &str = r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        plate TEXT UNIQUE NOT NULL,
        model TEXT,
        year INTEGER,
        color TEXT,
        registered_at TEXT NOT NULL,
        last_maintenance_at TEXT,
        last_maintenance_type TEXT,
        notes TEXT
    )
"#;

const CREATE_MAINTENANCE_EVENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS maintenance_events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        plate TEXT NOT NULL,
        occurred_at TEXT NOT NULL,
        kind TEXT NOT NULL,
        technician TEXT NOT NULL DEFAULT 'system',
        notes TEXT,
        FOREIGN KEY (plate) REFERENCES vehicles (plate)
    )
"#;

/// Crear un pool de conexiones a la base de datos
pub async fn create_pool(database_url: Option<&str>) -> Result<SqlitePool> {
    let database_url = match database_url {
        Some(url) => url.to_string(),
        None => std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://fleet.db".to_string()),
    };

    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Pool en memoria con schema inicializado, para tests.
/// Una base `sqlite::memory:` vive en una única conexión: el pool queda
/// limitado a 1 y sin expiración de conexiones.
pub async fn create_memory_pool() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// Crea las tablas si no existen
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_VEHICLES).execute(pool).await?;
    sqlx::query(CREATE_MAINTENANCE_EVENTS).execute(pool).await?;
    Ok(())
}
