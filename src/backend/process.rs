//! Running external tools with captured output

use std::ffi::OsStr;
use std::process::{Command, Output, Stdio};

use crate::error::CompressError;

/// Run `program` with `args`, failing on spawn errors and non-zero exits.
pub fn run_tool<I, S>(program: &str, args: I) -> Result<Output, CompressError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    log::debug!("Running {:?}", command);

    let output = command.output().map_err(|source| CompressError::Spawn {
        program: program.to_string(),
        source,
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(CompressError::ToolFailed {
            program: program.to_string(),
            status: output.status,
            stderr,
        });
    }

    Ok(output)
}

/// Check if `program` can be started and exits cleanly with `probe_arg`
pub fn probe(program: &str, probe_arg: &str) -> bool {
    match run_tool(program, [probe_arg]) {
        Ok(output) => {
            log::debug!(
                "{} {}: {}",
                program,
                probe_arg,
                String::from_utf8_lossy(&output.stdout).trim()
            );
            true
        }
        Err(e) => {
            log::debug!("Probe failed: {}", e);
            false
        }
    }
}
