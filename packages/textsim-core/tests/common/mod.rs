//! Common test utilities for textsim-core
//!
//! Shared fixtures and assertions for integration tests.

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;
