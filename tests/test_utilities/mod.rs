#![allow(dead_code)]

/// Shared test utilities for integration tests
pub mod mocks;
pub mod servers;
