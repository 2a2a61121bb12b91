//! Test utilities
//!
//! Hand-written in-memory repository and test fixtures for unit testing.
//!
//! Tests that need to assert call counts or argument values use the
//! `mockall`-generated `MockUserRepository` instead. The in-memory repository
//! is for tests that want real insert/lookup behavior and a record of calls.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
