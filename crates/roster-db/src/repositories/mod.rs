//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in roster-core.

use chrono::{DateTime, SubsecRound, Utc};

mod error;
mod student;
mod vehicle;

pub use student::PgStudentRepository;
pub use vehicle::PgVehicleRepository;

/// Current time at the microsecond precision a `TIMESTAMPTZ` column keeps,
/// so returned records match what a later read sees
pub(crate) fn db_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
