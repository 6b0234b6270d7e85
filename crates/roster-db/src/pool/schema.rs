//! Schema bootstrap for the `students` and `vehicles` tables

use sqlx::PgPool;
use tracing::info;

// `seq` preserves insertion order for listing; rows are never physically removed.
const STATEMENTS: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS students (
        seq         BIGSERIAL UNIQUE,
        id          UUID PRIMARY KEY,
        first_name  TEXT NOT NULL,
        last_name   TEXT NOT NULL,
        age         INTEGER NOT NULL CHECK (age > 18),
        gender      TEXT NOT NULL CHECK (gender IN ('Male', 'Female', 'Other')),
        phone       TEXT NOT NULL,
        email       TEXT NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL,
        updated_at  TIMESTAMPTZ NOT NULL,
        is_active   BOOLEAN NOT NULL DEFAULT TRUE,
        CHECK (updated_at >= created_at)
    )
    ",
    r"CREATE INDEX IF NOT EXISTS idx_students_email ON students (email)",
    r"CREATE INDEX IF NOT EXISTS idx_students_active_seq ON students (seq) WHERE is_active",
    r"
    CREATE TABLE IF NOT EXISTS vehicles (
        seq            BIGSERIAL UNIQUE,
        id             UUID PRIMARY KEY,
        make           TEXT NOT NULL,
        model          TEXT NOT NULL,
        body_type      TEXT NOT NULL CHECK (body_type IN ('Cabriolet', 'Coupe', 'Estate',
                           'Hatchback', 'MPV', 'Saloon', 'Van', 'SUV')),
        engine_size    DOUBLE PRECISION NOT NULL CHECK (engine_size > 0),
        transmission   TEXT NOT NULL CHECK (transmission IN ('Manual', 'Automatic')),
        vehicle_age    INTEGER NOT NULL CHECK (vehicle_age >= 0),
        fuel_type      TEXT NOT NULL CHECK (fuel_type IN ('Petrol', 'Diesel', 'Hybrid',
                           'Electric', 'Plugin Hybrid')),
        colour         TEXT NOT NULL,
        vehicle_price  DOUBLE PRECISION NOT NULL CHECK (vehicle_price >= 0),
        created_at     TIMESTAMPTZ NOT NULL,
        updated_at     TIMESTAMPTZ NOT NULL,
        is_available   BOOLEAN NOT NULL DEFAULT TRUE
    )
    ",
];

/// Create the tables and indexes this crate expects, if missing
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema ready");
    Ok(())
}
