/// Shared test helpers for integration tests
pub mod mocks;
