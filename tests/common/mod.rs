//! Common test infrastructure
//!
//! Provides the seeded store and the catalog constants shared by the
//! integration tests. Tests should only import from this module.

mod constants;
mod fixtures;

// Public API - this is what tests import
pub use constants::*;
pub use fixtures::create_test_store;
