//! Bounded child-process execution.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use termsim_types::error::{Result, ShellError};
use tokio::io::AsyncReadExt;
use tokio::process::Child;

use crate::command::Invocation;

const CHUNK: usize = 8 * 1024;

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Standard output, or standard error when stdout was empty.
    pub text: String,
}

/// Runs an [`Invocation`] to completion.
///
/// Implementations must return `ShellError::Timeout` once `timeout` elapses
/// and must not return more than `max_output` bytes of text.
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation, timeout: Duration, max_output: usize)
    -> Result<ProcessOutput>;
}

/// Runs processes on a private current-thread tokio runtime.
///
/// When called from inside a runtime the private one is driven on a scoped
/// helper thread instead, since a runtime cannot block on the thread of
/// another. The child is killed when the timeout fires or when either output
/// stream grows past the cap.
#[derive(Debug, Default)]
pub struct TokioRunner;

impl ProcessRunner for TokioRunner {
    fn run(
        &self,
        invocation: &Invocation,
        timeout: Duration,
        max_output: usize,
    ) -> Result<ProcessOutput> {
        if tokio::runtime::Handle::try_current().is_err() {
            return block_on_private(invocation, timeout, max_output);
        }
        std::thread::scope(|scope| {
            scope
                .spawn(|| block_on_private(invocation, timeout, max_output))
                .join()
                .unwrap_or_else(|_| {
                    Err(ShellError::Io(io::Error::other(format!(
                        "{}: runner thread panicked",
                        invocation.program
                    ))))
                })
        })
    }
}

fn block_on_private(
    invocation: &Invocation,
    timeout: Duration,
    max_output: usize,
) -> Result<ProcessOutput> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_bounded(invocation, timeout, max_output))
}

async fn run_bounded(
    invocation: &Invocation,
    timeout: Duration,
    max_output: usize,
) -> Result<ProcessOutput> {
    let child = tokio::process::Command::new(&invocation.program)
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    // Dropping the pending future on timeout drops the child, which kills it.
    match tokio::time::timeout(timeout, collect(child, &invocation.program, max_output)).await {
        Ok(output) => output,
        Err(_) => {
            log::warn!(
                "{} exceeded {} ms, abandoning",
                invocation.program,
                timeout.as_millis()
            );
            Err(ShellError::Timeout(timeout.as_millis() as u64))
        },
    }
}

/// Drain both pipes in chunks until the child closes them or one passes
/// `max_output` bytes, then reap the child.
async fn collect(mut child: Child, program: &str, max_output: usize) -> Result<ProcessOutput> {
    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("stdout not captured"))?;
    let mut stderr = child
        .stderr
        .take()
        .ok_or_else(|| io::Error::other("stderr not captured"))?;

    let (mut out, mut err) = (Vec::new(), Vec::new());
    let (mut out_chunk, mut err_chunk) = ([0u8; CHUNK], [0u8; CHUNK]);
    let (mut out_open, mut err_open) = (true, true);
    let mut overflowed = false;
    while out_open || err_open {
        tokio::select! {
            n = stdout.read(&mut out_chunk), if out_open => match n? {
                0 => out_open = false,
                n => out.extend_from_slice(&out_chunk[..n]),
            },
            n = stderr.read(&mut err_chunk), if err_open => match n? {
                0 => err_open = false,
                n => err.extend_from_slice(&err_chunk[..n]),
            },
        }
        if out.len() > max_output || err.len() > max_output {
            overflowed = true;
            break;
        }
    }

    if overflowed {
        log::warn!("{program} wrote more than {max_output} bytes, killing it");
        child.kill().await?;
    }
    let status = child.wait().await?;
    let stream = if out.is_empty() { &err } else { &out };
    let mut text = truncate(stream, max_output);
    if !status.success() && text.is_empty() {
        text = format!("exited with {status}");
    }
    Ok(ProcessOutput {
        success: status.success() && !overflowed,
        text,
    })
}

/// Decode at most `max` bytes, never splitting a UTF-8 sequence.
fn truncate(bytes: &[u8], max: usize) -> String {
    if bytes.len() <= max {
        return String::from_utf8_lossy(bytes).into_owned();
    }
    let mut text = String::from_utf8_lossy(&bytes[..max]).into_owned();
    // A cut multi-byte sequence decodes to U+FFFD; drop it.
    if text.ends_with('\u{FFFD}') {
        text.pop();
    }
    text
}
