// file: src/report.rs
// version: 1.0.0
// guid: 1ea03ddf-7fe6-4b6d-9198-69609acfed38

//! User-facing output around a forwarded invocation

use crate::config::OutputMode;
use crate::executor::Outcome;
use std::io::{self, Write};

/// Banner printed before a captured run
pub fn running_line(command: &str) -> String {
    format!("Running command: {}", command)
}

/// Line printed once the child has exited
pub fn exit_line(mode: OutputMode, exit_code: i32) -> String {
    match mode {
        OutputMode::Inherit => format!("Exit code: {}", exit_code),
        OutputMode::Capture => format!("Exit status: {}", exit_code),
    }
}

/// Replay captured output, then the exit line when `print_exit_code` is set
pub fn write_outcome<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    mode: OutputMode,
    outcome: &Outcome,
    print_exit_code: bool,
) -> io::Result<()> {
    if let Some(ref stdout) = outcome.stdout {
        write_block(out, stdout)?;
    }
    if let Some(ref stderr) = outcome.stderr {
        write_block(err, stderr)?;
    }
    err.flush()?;

    if print_exit_code {
        writeln!(out, "{}", exit_line(mode, outcome.exit_code))?;
    }
    out.flush()
}

fn write_block<W: Write>(w: &mut W, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    w.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mode: OutputMode, outcome: &Outcome, print: bool) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_outcome(&mut out, &mut err, mode, outcome, print).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_inherit_prints_exit_code_only() {
        let outcome = Outcome {
            exit_code: 1,
            stdout: None,
            stderr: None,
        };

        let (out, err) = render(OutputMode::Inherit, &outcome, true);

        assert_eq!(out, "Exit code: 1\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_capture_replays_streams() {
        let outcome = Outcome {
            exit_code: 0,
            stdout: Some("pact-broker-cli 0.1.0".to_string()),
            stderr: Some("warning\n".to_string()),
        };

        let (out, err) = render(OutputMode::Capture, &outcome, true);

        assert_eq!(out, "pact-broker-cli 0.1.0\nExit status: 0\n");
        assert_eq!(err, "warning\n");
    }

    #[test]
    fn test_exit_line_can_be_suppressed() {
        let outcome = Outcome {
            exit_code: 4,
            stdout: Some(String::new()),
            stderr: Some(String::new()),
        };

        let (out, err) = render(OutputMode::Capture, &outcome, false);

        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_running_line() {
        assert_eq!(
            running_line("target/release/pact-broker-cli pactflow"),
            "Running command: target/release/pact-broker-cli pactflow"
        );
    }
}
