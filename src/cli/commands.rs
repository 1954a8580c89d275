// file: src/cli/commands.rs
// version: 1.1.0
// guid: 4f8288a4-267a-49d1-a05e-988a992c8a05

//! Command implementations for the CLI

use crate::{
    cli::args::Cli,
    config::{Config, OutputMode},
    executor::Executor,
    forward::{display_command, forwarded_args},
    logging::logger,
    report, Result,
};
use tracing::{debug, warn};

/// Forward the command line to the wrapped binary and return the status the
/// wrapper should exit with
pub async fn forward_command(cli: Cli) -> Result<i32> {
    let log = match logger::init_logger(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("{}", e);
            None
        }
    };

    let mut config = Config::load(cli.config.as_deref()).await?;
    config.apply_cli(&cli);

    if let Some(ref log) = log {
        if let Err(e) = log.apply_level(&config.log_level) {
            warn!("{}", e);
        }
    }
    debug!("Resolved configuration: {:?}", config);

    let args = forwarded_args(config.forward_mode, &cli.args);
    if args.len() != cli.args.len() {
        debug!("Re-tokenized {} argument(s) into {}", cli.args.len(), args.len());
    }

    let executor = Executor::new(&config)?;
    if config.output_mode == OutputMode::Capture {
        println!(
            "{}",
            report::running_line(&display_command(executor.binary(), &args))
        );
    }

    let outcome = executor.run(&args).await?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    if let Err(e) = report::write_outcome(
        &mut stdout.lock(),
        &mut stderr.lock(),
        config.output_mode,
        &outcome,
        config.print_exit_code,
    ) {
        warn!("Failed to write output: {}", e);
    }

    Ok(outcome.exit_code)
}
