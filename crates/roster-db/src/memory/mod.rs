//! In-memory record stores
//!
//! Each store keeps its records in a [`RecordArena`] behind a
//! `parking_lot::RwLock`. Reads take the shared lock and clone a snapshot;
//! every write runs under the exclusive lock, so derived fields (such as a
//! student's email) are computed and stored in one atomic step.

mod arena;
mod student;
mod task;
mod vehicle;

pub use arena::{Keyed, RecordArena};
pub use student::InMemoryStudentRepository;
pub use task::InMemoryTaskRepository;
pub use vehicle::InMemoryVehicleRepository;
