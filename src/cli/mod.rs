// file: src/cli/mod.rs
// version: 1.0.0
// guid: ff48ae6c-7143-41f3-824f-0f970f592395

//! Command line interface for the wrapper

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
