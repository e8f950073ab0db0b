//! Blocking invocation of external programs

use std::io::ErrorKind;
use std::process::Command;

use tracing::info;

use crate::{FpBenchError, Result};

/// Run `program` with `args` and wait for it to exit.
///
/// Stdout and stderr are inherited. There is no timeout: a hung child
/// blocks the caller until it is killed externally.
pub fn check_call(program: &str, args: &[String]) -> Result<()> {
    info!("run: {} {}", program, args.join(" "));

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                FpBenchError::CompressorUnavailable(format!("{}: executable not found", program))
            }
            ErrorKind::PermissionDenied => {
                FpBenchError::CompressorUnavailable(format!("{}: not executable", program))
            }
            _ => FpBenchError::IoError(e),
        })?;

    if !status.success() {
        return Err(FpBenchError::CompressorFailed(format!(
            "{} {} exited with {}",
            program,
            args.join(" "),
            status
        )));
    }

    Ok(())
}
