//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod health;
pub mod root;
pub mod students;
pub mod tasks;
pub mod vehicles;
