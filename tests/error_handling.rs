use fpbench::bench::TrialRunner;
use fpbench::config::BenchConfig;
use fpbench::error;
use fpbench::models::{DataType, Dataset};
use fpbench::FpBenchError;
use std::fs;
use std::sync::{Mutex, MutexGuard};
use tempfile::tempdir;

static SPAWN_LOCK: Mutex<()> = Mutex::new(());

fn spawn_lock() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(unix)]
fn write_tool(dir: &std::path::Path, name: &str, body: &str, mode: u32) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
}

#[test]
fn test_missing_compressor() {
    let _guard = spawn_lock();
    let dir = tempdir().unwrap();
    let input = dir.path().join("rsim.f32");
    fs::write(&input, [0u8; 64]).unwrap();
    let ds = Dataset::new("rsim.f32", &input, DataType::F32, 1, vec![16]);

    let runner = TrialRunner::new(
        BenchConfig::new()
            .with_output_path(dir.path().join("testout"))
            .with_zstd_program("fpbench-no-such-zstd"),
    );
    let err = runner.run_trial(&ds, 3).unwrap_err();

    assert!(matches!(err, FpBenchError::CompressorUnavailable(_)));
    assert!(error::user_friendly_message(&err).contains("installed"));
}

#[cfg(unix)]
#[test]
fn test_missing_input_produces_no_result() {
    let _guard = spawn_lock();
    let dir = tempdir().unwrap();
    let zstd = write_tool(dir.path(), "fake-zstd", "cp \"$5\" \"$3\"", 0o755);
    let output = dir.path().join("testout");
    // Stale output from an earlier trial must not be picked up.
    fs::write(&output, [1u8; 10]).unwrap();

    let ds = Dataset::new("rsim.f32", dir.path().join("absent.f32"), DataType::F32, 1, vec![]);
    let runner = TrialRunner::new(
        BenchConfig::new()
            .with_output_path(&output)
            .with_zstd_program(zstd.display().to_string()),
    );

    let err = runner.run_trial(&ds, 3).unwrap_err();
    assert!(matches!(err, FpBenchError::CompressorFailed(_)));
    assert_eq!(fs::read(&output).unwrap(), vec![1u8; 10]);
}

#[cfg(unix)]
#[test]
fn test_non_zero_exit() {
    let _guard = spawn_lock();
    let dir = tempdir().unwrap();
    let zstd = write_tool(dir.path(), "failing-zstd", "exit 3", 0o755);
    let input = dir.path().join("rsim.f32");
    fs::write(&input, [0u8; 64]).unwrap();
    let ds = Dataset::new("rsim.f32", &input, DataType::F32, 1, vec![16]);

    let runner = TrialRunner::new(
        BenchConfig::new()
            .with_output_path(dir.path().join("testout"))
            .with_zstd_program(zstd.display().to_string()),
    );

    match runner.run_trial(&ds, 3) {
        Err(FpBenchError::CompressorFailed(msg)) => assert!(msg.contains("-3")),
        other => panic!("unexpected: {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_unexecutable_compressor() {
    let _guard = spawn_lock();
    let dir = tempdir().unwrap();
    let zstd = write_tool(dir.path(), "plain-file", "exit 0", 0o644);
    let input = dir.path().join("rsim.f32");
    fs::write(&input, [0u8; 64]).unwrap();
    let ds = Dataset::new("rsim.f32", &input, DataType::F32, 1, vec![16]);

    let runner = TrialRunner::new(
        BenchConfig::new()
            .with_output_path(dir.path().join("testout"))
            .with_zstd_program(zstd.display().to_string()),
    );

    let err = runner.run_trial(&ds, 3).unwrap_err();
    assert!(matches!(err, FpBenchError::CompressorUnavailable(_)));
}

#[cfg(unix)]
#[test]
fn test_missing_output_after_success() {
    let _guard = spawn_lock();
    let dir = tempdir().unwrap();
    let zstd = write_tool(dir.path(), "silent-zstd", "exit 0", 0o755);
    let input = dir.path().join("rsim.f32");
    fs::write(&input, [0u8; 64]).unwrap();
    let ds = Dataset::new("rsim.f32", &input, DataType::F32, 1, vec![16]);

    let runner = TrialRunner::new(
        BenchConfig::new()
            .with_output_path(dir.path().join("never-written"))
            .with_zstd_program(zstd.display().to_string()),
    );

    let err = runner.run_trial(&ds, 3).unwrap_err();
    assert!(matches!(err, FpBenchError::FileSizeError(_)));
    assert!(error::user_friendly_message(&err).contains("file sizes"));
}

#[test]
fn test_error_display() {
    let err = FpBenchError::UnsupportedDataset("astro_mhd.f64".into());
    assert_eq!(err.to_string(), "Unsupported dataset: astro_mhd.f64");

    let io: FpBenchError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
    assert!(std::error::Error::source(&io).is_some());
}
