//! Dotenv files: line parsing, file loading, and the environment port
//!
//! The loader never talks to `std::env` directly; it goes through an
//! [`EnvironmentProvider`] so the whole cascade can run against an
//! in-memory environment.

pub mod loader;
pub mod parser;
pub mod provider;

pub use loader::load_env_file;
pub use parser::{EnvVariable, is_valid_env_key, parse_line};
#[cfg(any(test, feature = "test-utils"))]
pub use provider::MemoryEnvironmentProvider;
pub use provider::{EnvironmentProvider, LiveEnvironmentProvider};
