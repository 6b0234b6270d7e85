//! In-memory implementation of VehicleRepository

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use roster_core::{DomainError, NewVehicle, RecordId, RepoResult, Vehicle, VehicleRepository};

use super::arena::RecordArena;

/// In-memory implementation of VehicleRepository
#[derive(Default)]
pub struct InMemoryVehicleRepository {
    records: RwLock<RecordArena<Vehicle>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Vehicle>> {
        Ok(self.records.read().get(id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Vehicle>> {
        Ok(self.records.read().iter().cloned().collect())
    }

    async fn create(&self, draft: NewVehicle) -> RepoResult<Vehicle> {
        let vehicle = Vehicle::new(RecordId::new(), draft, Utc::now());
        if !self.records.write().push(vehicle.clone()) {
            return Err(DomainError::InternalError(format!(
                "duplicate vehicle id {}",
                vehicle.id
            )));
        }
        Ok(vehicle)
    }
}
