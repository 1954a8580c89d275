// file: src/logging/mod.rs
// version: 1.0.0
// guid: 5976f9b1-117b-4b5e-8864-c9692dd15fde

//! Logging system for the wrapper

pub mod logger;

pub use logger::init_logger;
