//! Media probe handler

use std::path::Path;

use crate::cli::output::print_json;
use crate::probe::MediaProbe;
use crate::AppConfig;
use crate::Result;

pub async fn handle_probe_command(config: &AppConfig, path: &Path) -> Result<()> {
    let report = MediaProbe::from_config(&config.probe).analyze(path).await;
    print_json(&report)
}
