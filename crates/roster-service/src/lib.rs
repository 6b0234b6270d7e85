//! # roster-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CreateStudentRequest, CreateVehicleRequest, HealthChecks, HealthResponse, MessageResponse,
    ReadinessResponse, SearchStudentsQuery, StudentResponse, TaskRequest, TaskResponse,
    UpdateStudentRequest, VehicleResponse,
};
pub use services::{
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, StudentService,
    TaskService, VehicleService,
};
