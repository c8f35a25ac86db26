//! Host-side integration test binary.
//!
//! One compilation unit so the mock hardware module is shared across
//! test files without re-compiling it per target.

mod mock_hw;
mod service_tests;
