// file: src/forward.rs
// version: 1.1.0
// guid: 399f8342-83c2-434c-8ef3-d625d3f7cee1

//! Argument forwarding rules
//!
//! Arguments stay `OsString` end to end, so bytes that are not valid UTF-8
//! reach the wrapped binary unchanged.

use crate::config::ForwardMode;
use std::ffi::{OsStr, OsString};

/// Join the arguments with single spaces and split the result on whitespace.
///
/// An argument containing whitespace becomes several arguments, and empty or
/// blank arguments disappear. Joining and then splitting is the same as
/// splitting each argument on its own, which is what this does.
pub fn retokenize<S: AsRef<OsStr>>(args: &[S]) -> Vec<OsString> {
    args.iter()
        .flat_map(|arg| split_whitespace(arg.as_ref()))
        .collect()
}

/// Arguments to hand to the wrapped binary for the given mode
pub fn forwarded_args<S: AsRef<OsStr>>(mode: ForwardMode, args: &[S]) -> Vec<OsString> {
    match mode {
        ForwardMode::Retokenize => retokenize(args),
        ForwardMode::Verbatim => args.iter().map(|s| s.as_ref().to_os_string()).collect(),
    }
}

/// Human-readable command line, used for logging and the capture banner
pub fn display_command<S: AsRef<OsStr>>(binary: &str, args: &[S]) -> String {
    let mut line = binary.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.as_ref().to_string_lossy());
    }
    line
}

/// Unicode whitespace plus the ASCII file, group, record and unit
/// separators (U+001C..=U+001F)
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split one argument on separator characters without decoding it lossily.
///
/// Bytes that do not form valid UTF-8 never count as separators.
fn split_whitespace(arg: &OsStr) -> Vec<OsString> {
    let bytes = arg.as_encoded_bytes();
    let mut pieces = Vec::new();
    let mut start: Option<usize> = None;
    let mut i = 0;

    while i < bytes.len() {
        let (separator, len) = separator_at(&bytes[i..]);
        if separator {
            if let Some(s) = start.take() {
                pieces.push(piece(&bytes[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
        i += len;
    }

    if let Some(s) = start {
        pieces.push(piece(&bytes[s..]));
    }
    pieces
}

/// Whether `bytes` starts with a separator, and how many bytes to advance
fn separator_at(bytes: &[u8]) -> (bool, usize) {
    let width = match bytes[0] {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => return (false, 1),
    };

    match bytes.get(..width).map(std::str::from_utf8) {
        Some(Ok(s)) => match s.chars().next() {
            Some(c) => (is_separator(c), width),
            None => (false, 1),
        },
        _ => (false, 1),
    }
}

fn piece(bytes: &[u8]) -> OsString {
    // SAFETY: `bytes` came from `as_encoded_bytes` and is only ever cut
    // immediately before or after a complete, valid UTF-8 separator char.
    unsafe { OsStr::from_encoded_bytes_unchecked(bytes) }.to_os_string()
}
