// file: src/cli/args.rs
// version: 1.1.0
// guid: 8ca7d2c4-1e19-4a86-9f7a-edb6de5c232a

//! Command line argument definitions
//!
//! Every wrapper option is prefixed with `--wrapper-` and `-h`/`-V` are left
//! alone, so the wrapped binary's own flags reach it untouched.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pact-cli-wrapper")]
#[command(about = "Run pact-broker-cli with the given arguments and pass its exit code through")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Binary to forward to
    #[arg(long = "wrapper-binary", env = "PACT_WRAPPER_BINARY", value_name = "PATH")]
    pub binary: Option<String>,

    /// Forward arguments exactly as received instead of re-splitting on whitespace
    #[arg(
        long = "wrapper-verbatim",
        env = "PACT_WRAPPER_VERBATIM",
        value_parser = FalseyValueParser::new()
    )]
    pub verbatim: bool,

    /// Capture the child's output and print it after it exits
    #[arg(
        long = "wrapper-capture",
        env = "PACT_WRAPPER_CAPTURE",
        value_parser = FalseyValueParser::new()
    )]
    pub capture: bool,

    /// Do not print the exit code line
    #[arg(
        long = "wrapper-quiet-exit",
        env = "PACT_WRAPPER_QUIET_EXIT",
        value_parser = FalseyValueParser::new()
    )]
    pub quiet_exit: bool,

    /// Read configuration from this file only
    #[arg(long = "wrapper-config", env = "PACT_WRAPPER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(long = "wrapper-verbose")]
    pub verbose: bool,

    /// Print wrapper help
    #[arg(long = "wrapper-help", action = ArgAction::Help)]
    help: Option<bool>,

    /// Print wrapper version
    #[arg(long = "wrapper-version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Arguments for the wrapped binary
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "ARGS",
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}
