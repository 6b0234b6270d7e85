//! Vehicle service
//!
//! Inventory listing and intake. Vehicles are never edited once created.

use roster_core::{NewVehicle, RecordId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateVehicleRequest, VehicleResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Vehicle service
pub struct VehicleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VehicleService<'a> {
    /// Create a new VehicleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All vehicles in intake order
    #[instrument(skip(self))]
    pub async fn list_vehicles(&self) -> ServiceResult<Vec<VehicleResponse>> {
        let vehicles = self.ctx.vehicle_repo().list().await?;
        Ok(vehicles.iter().map(VehicleResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_vehicle(&self, vehicle_id: RecordId) -> ServiceResult<VehicleResponse> {
        let vehicle = self
            .ctx
            .vehicle_repo()
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Vehicle", vehicle_id.to_string()))?;

        Ok(VehicleResponse::from(&vehicle))
    }

    #[instrument(skip(self, request))]
    pub async fn create_vehicle(
        &self,
        request: CreateVehicleRequest,
    ) -> ServiceResult<VehicleResponse> {
        request.validate()?;

        let vehicle = self
            .ctx
            .vehicle_repo()
            .create(NewVehicle::from(request))
            .await?;

        info!(vehicle_id = %vehicle.id, body_type = %vehicle.body_type, "Vehicle added");
        Ok(VehicleResponse::from(&vehicle))
    }
}
