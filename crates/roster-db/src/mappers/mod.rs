//! Entity to model mappers
//!
//! - `TryFrom<Model> for Entity`: convert database rows to domain objects
//! - `*Row` structs: prepare entity data for database writes

mod student;
mod vehicle;

pub use student::StudentRow;
