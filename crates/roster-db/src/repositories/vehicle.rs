//! PostgreSQL implementation of VehicleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use roster_core::{NewVehicle, RecordId, RepoResult, Vehicle, VehicleRepository};

use crate::models::VehicleModel;

use super::db_now;
use super::error::map_db_error;

/// PostgreSQL implementation of VehicleRepository
#[derive(Clone)]
pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    /// Create a new PgVehicleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Vehicle>> {
        let result = sqlx::query_as::<_, VehicleModel>(
            r"
            SELECT id, make, model, body_type, engine_size, transmission, vehicle_age,
                   fuel_type, colour, vehicle_price, created_at, updated_at, is_available
            FROM vehicles
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Vehicle::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Vehicle>> {
        let rows = sqlx::query_as::<_, VehicleModel>(
            r"
            SELECT id, make, model, body_type, engine_size, transmission, vehicle_age,
                   fuel_type, colour, vehicle_price, created_at, updated_at, is_available
            FROM vehicles
            ORDER BY seq
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Vehicle::try_from).collect()
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: NewVehicle) -> RepoResult<Vehicle> {
        let vehicle = Vehicle::new(RecordId::new(), draft, db_now());

        sqlx::query(
            r"
            INSERT INTO vehicles (id, make, model, body_type, engine_size, transmission,
                                  vehicle_age, fuel_type, colour, vehicle_price,
                                  created_at, updated_at, is_available)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(vehicle.id.into_inner())
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.body_type.as_str())
        .bind(vehicle.engine_size)
        .bind(vehicle.transmission.as_str())
        .bind(vehicle.vehicle_age)
        .bind(vehicle.fuel_type.as_str())
        .bind(&vehicle.colour)
        .bind(vehicle.vehicle_price)
        .bind(vehicle.created_at)
        .bind(vehicle.updated_at)
        .bind(vehicle.is_available)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        debug!(vehicle_id = %vehicle.id, "Vehicle inserted");
        Ok(vehicle)
    }
}
