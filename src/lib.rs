// file: src/lib.rs
// version: 1.0.0
// guid: b4d19850-af25-4208-afd9-75ae171085cf

//! # pact-cli-wrapper
//!
//! Forwards its arguments to a pre-built `pact-broker-cli` binary, waits for
//! it, and exits with the same status.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod forward;
pub mod logging;
pub mod report;

pub use error::{Result, WrapperError};

/// Version information for the wrapper
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
