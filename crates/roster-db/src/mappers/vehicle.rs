//! Vehicle entity <-> model mapper

use roster_core::{DomainError, RecordId, Vehicle};

use crate::models::VehicleModel;

/// Convert VehicleModel to Vehicle entity
impl TryFrom<VehicleModel> for Vehicle {
    type Error = DomainError;

    fn try_from(model: VehicleModel) -> Result<Self, Self::Error> {
        Ok(Vehicle {
            id: RecordId::from_uuid(model.id),
            make: model.make,
            model: model.model,
            body_type: model.body_type.parse().map_err(DomainError::DatabaseError)?,
            engine_size: model.engine_size,
            transmission: model
                .transmission
                .parse()
                .map_err(DomainError::DatabaseError)?,
            vehicle_age: model.vehicle_age,
            fuel_type: model.fuel_type.parse().map_err(DomainError::DatabaseError)?,
            colour: model.colour,
            vehicle_price: model.vehicle_price,
            created_at: model.created_at,
            updated_at: model.updated_at,
            is_available: model.is_available,
        })
    }
}
