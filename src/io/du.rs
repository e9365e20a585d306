use crate::constants::DU_PROGRAM;
use crate::pipeline::Colorizer;
use anyhow::{Context, Result, anyhow};
use std::ffi::OsString;
use std::io::{self, BufReader};
use std::process::{Command, ExitCode, Stdio};
use tracing::debug;

/// Run `du` with `args` and stream its colorized report to stdout.
///
/// Returns du's own exit status so callers can pass it on.
pub fn run(
    args: &[OsString],
    colorizer: &Colorizer,
) -> Result<ExitCode> {
    debug!(program = DU_PROGRAM, ?args, "spawning");
    let mut child = Command::new(DU_PROGRAM)
        .args(args)
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to run {DU_PROGRAM}"))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("{DU_PROGRAM} stdout was not captured"))?;

    let streamed = colorizer.colorize_stream(BufReader::new(stdout), io::stdout().lock());
    match streamed {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed early, stopping");
            // du gets SIGPIPE once its pipe reader is gone
            let _ = child.wait();
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(e).context("failed to stream du output");
        }
    }

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {DU_PROGRAM}"))?;
    if status.success() {
        return Ok(ExitCode::SUCCESS);
    }
    debug!("{DU_PROGRAM} exited with {status}");
    let code = status.code().unwrap_or(1);
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
