// src/process.rs
//! Short-lived helper processes (`git`, `gh`) whose failure is never fatal.
//!
//! Every invocation goes through [`capture_stdout`], which turns a missing
//! binary, a non-zero exit or unreadable output into `None`. Callers treat
//! `None` as "this source has nothing to offer" and move on.

use crate::constants::SUBPROCESS_STDERR_PREVIEW_LENGTH;
use std::io::Write;
use std::process::{Command, Stdio};

/// Runs `command` to completion, optionally feeding `stdin`, and returns its
/// standard output when it exits successfully.
pub fn capture_stdout(command: &mut Command, stdin: Option<&str>) -> Option<String> {
    let program = command.get_program().to_string_lossy().into_owned();

    command
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) => {
            log::debug!("Could not run {}: {}", program, e);
            return None;
        }
    };

    if let (Some(input), Some(mut pipe)) = (stdin, child.stdin.take()) {
        if let Err(e) = pipe.write_all(input.as_bytes()) {
            log::debug!("Could not write to {} stdin: {}", program, e);
        }
        // Dropping the pipe closes stdin so the child sees EOF.
    }

    let output = match child.wait_with_output() {
        Ok(output) => output,
        Err(e) => {
            log::debug!("Could not wait for {}: {}", program, e);
            return None;
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let preview: String = stderr
            .trim()
            .chars()
            .take(SUBPROCESS_STDERR_PREVIEW_LENGTH)
            .collect();
        log::debug!("{} exited with {}: {}", program, output.status, preview);
        return None;
    }

    match String::from_utf8(output.stdout) {
        Ok(stdout) => Some(stdout),
        Err(e) => {
            log::debug!("{} produced non UTF-8 output: {}", program, e);
            None
        }
    }
}
