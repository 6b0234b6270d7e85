//! # roster-db
//!
//! Record stores implementing the repository traits from `roster-core`.
//!
//! ## Overview
//!
//! - [`memory`]: arena-style stores (vector plus identifier index) behind a
//!   read/write lock; the default backend
//! - [`repositories`]: PostgreSQL stores over the `students` and `vehicles`
//!   tables
//! - [`pool`]: connection pool management and schema bootstrap
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::pool::{create_pool, ensure_schema, DatabaseConfig};
//! use roster_db::PgStudentRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     ensure_schema(&pool).await?;
//!     let students = PgStudentRepository::new(pool, "student-university.co.uk");
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{
    InMemoryStudentRepository, InMemoryTaskRepository, InMemoryVehicleRepository, Keyed,
    RecordArena,
};
pub use pool::{create_pool, ensure_schema, DatabaseConfig, PgPool};
pub use repositories::{PgStudentRepository, PgVehicleRepository};
