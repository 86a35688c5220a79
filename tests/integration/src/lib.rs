//! Integration test utilities for the employee walkthrough
//!
//! This crate provides helpers for running end-to-end tests against a real
//! PostgreSQL database (when `DATABASE_URL` is set) or the in-memory repository.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
