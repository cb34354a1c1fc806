#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use spreadit::probe::MediaProbe;
use spreadit::probe::Safety;
use tempfile::TempDir;

/// Write an executable stand-in for ffprobe
fn fake_ffprobe(dir: &Path, script: &str) -> PathBuf {
    let path = dir.join("ffprobe");
    std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn media_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("clip.mp4");
    std::fs::write(&path, b"not really a video").unwrap();
    path
}

#[tokio::test]
async fn test_probe_reports_duration() {
    let dir = tempfile::tempdir().unwrap();
    let program = fake_ffprobe(
        dir.path(),
        r#"echo '{"streams":[],"format":{"duration":"42.500000"}}'"#,
    );
    let clip = media_file(&dir);

    let report = MediaProbe::new(program, Duration::from_secs(5))
        .analyze(&clip)
        .await;
    assert!(report.success, "{:?}", report.error);
    assert!((report.duration.unwrap() - 42.5).abs() < f64::EPSILON);
    assert_eq!(report.safety, Safety::Safe);
    assert!(!report.is_simulation);
}

#[tokio::test]
async fn test_probe_failure_exit_status() {
    spreadit::logging::init_simple_logging();
    let dir = tempfile::tempdir().unwrap();
    let program = fake_ffprobe(dir.path(), "echo 'moov atom not found' >&2\nexit 1");
    let clip = media_file(&dir);

    let report = MediaProbe::new(program, Duration::from_secs(5))
        .analyze(&clip)
        .await;
    assert!(!report.success);
    assert!(report.is_simulation);
    assert_eq!(report.safety, Safety::Unknown);
    assert!(report.error.unwrap().contains("moov atom not found"));
}

#[tokio::test]
async fn test_probe_times_out() {
    let dir = tempfile::tempdir().unwrap();
    let program = fake_ffprobe(dir.path(), "sleep 5");
    let clip = media_file(&dir);

    let report = MediaProbe::new(program, Duration::from_millis(200))
        .analyze(&clip)
        .await;
    assert!(!report.success);
    assert!(report.error.unwrap().contains("timed out"));
}

#[tokio::test]
async fn test_missing_program_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let clip = media_file(&dir);

    let report = MediaProbe::new(dir.path().join("no-ffprobe"), Duration::from_secs(1))
        .analyze(&clip)
        .await;
    assert!(!report.success);
    assert!(report.error.is_some());
}
