//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and calls one store
//! operation per request, translating DTOs at the edges.

pub mod context;
pub mod error;
pub mod student;
pub mod task;
pub mod vehicle;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use student::StudentService;
pub use task::TaskService;
pub use vehicle::VehicleService;
