//! Media duration probe backed by ffprobe

use std::path::Path;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;
use tokio::process::Command;
use tracing::debug;
use tracing::warn;

use crate::config::ProbeConfig;
use crate::errors::SpreadItError;
use crate::Result;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: Option<FfprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

/// Whether the probed media was actually inspected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Safety {
    Safe,
    Unknown,
}

/// Response printed by `spreadit probe`
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub is_simulation: bool,
    pub safety: Safety,
}

impl ProbeReport {
    pub fn measured(duration: f64) -> Self {
        Self {
            success: true,
            duration: Some(duration),
            error: None,
            is_simulation: false,
            safety: Safety::Safe,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            duration: None,
            error: Some(error.into()),
            is_simulation: true,
            safety: Safety::Unknown,
        }
    }
}

/// Extract `format.duration` (seconds) from ffprobe's JSON output
pub fn parse_duration(stdout: &[u8]) -> Result<f64> {
    let output: FfprobeOutput = serde_json::from_slice(stdout)?;
    let raw = output
        .format
        .and_then(|format| format.duration)
        .ok_or_else(|| {
            SpreadItError::ProbeError("no format.duration in ffprobe output".to_string())
        })?;

    let duration: f64 = raw
        .trim()
        .parse()
        .map_err(|_| SpreadItError::ProbeError(format!("invalid duration '{raw}'")))?;

    if !duration.is_finite() || duration < 0.0 {
        return Err(SpreadItError::ProbeError(format!("invalid duration '{raw}'")));
    }
    Ok(duration)
}

/// Runs ffprobe against media files
#[derive(Debug, Clone)]
pub struct MediaProbe {
    program: PathBuf,
    timeout: Duration,
}

impl MediaProbe {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(&config.ffprobe_path, Duration::from_secs(config.timeout_secs))
    }

    /// Duration of `path` in seconds
    pub async fn duration(&self, path: &Path) -> Result<f64> {
        if !path.is_file() {
            return Err(SpreadItError::ProbeError(format!(
                "no such file: {}",
                path.display()
            )));
        }

        debug!("Probing {} with {}", path.display(), self.program.display());

        let output = tokio::time::timeout(
            self.timeout,
            Command::new(&self.program)
                .kill_on_drop(true)
                .args(["-v", "error", "-show_format", "-show_streams", "-print_json"])
                .arg(path)
                .stdin(Stdio::null())
                .output(),
        )
        .await
        .map_err(|_| {
            SpreadItError::ProbeError(format!(
                "ffprobe timed out after {}s",
                self.timeout.as_secs_f32()
            ))
        })??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpreadItError::ProbeError(format!(
                "ffprobe exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        parse_duration(&output.stdout)
    }

    /// Probe `path` and fold any failure into the report
    pub async fn analyze(&self, path: &Path) -> ProbeReport {
        match self.duration(path).await {
            Ok(duration) => ProbeReport::measured(duration),
            Err(e) => {
                warn!("Probe of {} failed: {}", path.display(), e);
                ProbeReport::failed(e.to_string())
            }
        }
    }
}
