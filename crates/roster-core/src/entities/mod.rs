//! Domain entities - core business objects

mod student;
mod task;
mod vehicle;

pub use student::{Gender, NewStudent, Student, StudentPatch};
pub use task::{Task, TaskCategory, TaskDraft, TaskPriority, TaskStatus};
pub use vehicle::{BodyType, FuelType, NewVehicle, Transmission, Vehicle};
