//! Test support shared by unit tests and the integration test crate
//!
//! Compiled for `cfg(test)` and behind the `test-utils` feature.

pub mod filesystem;

pub use filesystem::TempDirFixture;
