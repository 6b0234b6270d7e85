//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers between DTOs and domain types

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateStudentRequest, CreateVehicleRequest, SearchStudentsQuery, TaskRequest,
    UpdateStudentRequest,
};

pub use responses::{
    HealthChecks, HealthResponse, MessageResponse, ReadinessResponse, StudentResponse,
    TaskResponse, VehicleResponse,
};
