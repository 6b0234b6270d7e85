//! Integration test utilities for the student records API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with the in-memory record store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
