// file: src/logging/logger.rs
// version: 1.1.0
// guid: 4a229a75-b6f1-4c5e-8a32-aed05408ae94

//! Logger initialization and configuration

use crate::error::WrapperError;
use crate::Result;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Environment variable that overrides the configured filter
pub const LOG_ENV: &str = "PACT_WRAPPER_LOG";

/// Level used until the configuration has been read
pub const DEFAULT_LEVEL: &str = "warn";

/// Build the filter: `PACT_WRAPPER_LOG` wins, then `--wrapper-verbose`, then
/// the configured level
pub fn build_filter(level: &str, verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }

    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

/// Handle for swapping the filter once the configured level is known
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    verbose: bool,
}

impl LogHandle {
    /// Switch to the configured level. `PACT_WRAPPER_LOG` and
    /// `--wrapper-verbose` still take precedence.
    pub fn apply_level(&self, level: &str) -> Result<()> {
        self.filter
            .reload(build_filter(level, self.verbose))
            .map_err(|e| WrapperError::config(format!("Failed to update log filter: {}", e)))
    }
}

/// Initialize the logging system before any configuration is read.
///
/// Output goes to stderr; stdout belongs to the wrapped binary.
pub fn init_logger(verbose: bool) -> Result<LogHandle> {
    let (filter, handle) = reload::Layer::new(build_filter(DEFAULT_LEVEL, verbose));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| WrapperError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(LogHandle {
        filter: handle,
        verbose,
    })
}
