//! Database models - SQLx-compatible structs for PostgreSQL tables

mod student;
mod vehicle;

pub use student::{EmailRowModel, StudentModel};
pub use vehicle::VehicleModel;
