//! Child-process execution with live output streaming.
//!
//! Long-running Terraform operations (apply, destroy) produce progress output
//! for minutes; both pipes are forwarded line by line as they arrive instead
//! of being buffered until exit.

use anyhow::{Context, Result};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::process::{Command, Stdio};
use std::thread;

/// Outcome of one child-process invocation. Output is streamed to the
/// console while the child runs, so only the exit status is captured here.
#[derive(Debug)]
pub struct InvocationResult {
    pub exit_code: i32,
}

impl InvocationResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run `program` with `args` in the current working directory, forwarding
/// stdout and stderr to the console as the child produces them.
///
/// A launch failure (binary missing or not spawnable) is an `Err`; a child
/// that runs and exits non-zero is an `Ok` carrying that exit code. Callers
/// decide whether a non-zero exit is fatal.
pub fn run_streamed(program: &str, args: &[String]) -> Result<InvocationResult> {
    let command_line =
        shell_words::join(std::iter::once(program).chain(args.iter().map(String::as_str)));
    tracing::debug!(command = %command_line, "spawning");

    if !program.contains(['/', '\\']) {
        which::which(program).with_context(|| format!("'{program}' not found on PATH"))?;
    }

    let mut child = Command::new(program)
        .args(args)
        // stdin stays attached: apply/destroy without -auto-approve prompt
        // the user for confirmation.
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("launch '{command_line}'"))?;

    let stdout = child.stdout.take().context("capture child stdout")?;
    let stderr = child.stderr.take().context("capture child stderr")?;

    // stderr drains on a helper thread so neither pipe can fill up and stall
    // the child while the other is being read.
    let stderr_thread = thread::spawn(move || forward_lines(stderr, io::stderr()));
    forward_lines(stdout, io::stdout());
    let _ = stderr_thread.join();

    let status = child
        .wait()
        .with_context(|| format!("wait for '{program}'"))?;
    // code() is None when the child was killed by a signal.
    let exit_code = status.code().unwrap_or(-1);
    Ok(InvocationResult { exit_code })
}

fn forward_lines(source: impl Read, mut sink: impl Write) {
    let reader = BufReader::new(source);
    for line in reader.lines() {
        let Ok(line) = line else { break };
        let _ = writeln!(sink, "{line}");
    }
}
