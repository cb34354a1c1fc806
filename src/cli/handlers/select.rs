//! Goal-account selection handler

use std::path::Path;

use tracing::error;

use crate::cli::output::print_json;
use crate::models::Profile;
use crate::models::SelectionMode;
use crate::selector::GoalAccount;
use crate::selector::InfluencerCatalog;
use crate::selector::InfluencerSelector;
use crate::AppConfig;
use crate::Result;

/// Build a selector from `catalog` if given, else the configured catalog
pub fn load_selector(config: &AppConfig, catalog: Option<&Path>) -> Result<InfluencerSelector> {
    let path = catalog.or_else(|| config.catalog_path());
    InfluencerCatalog::load(path).map(InfluencerSelector::new)
}

/// Select a goal account, never failing: catalog errors become a
/// `success: false` response with the last-resort profile
pub fn resolve_goal_account(
    config: &AppConfig,
    text: Option<&str>,
    category: Option<&str>,
    mode: Option<SelectionMode>,
    catalog: Option<&Path>,
) -> GoalAccount {
    let mode = mode.unwrap_or_else(|| config.selection_mode());
    match load_selector(config, catalog) {
        Ok(selector) => selector.get_goal_account(category, text, mode),
        Err(e) => {
            error!("Failed to load influencer catalog: {}", e);
            GoalAccount::fallback(Profile::last_resort(), e.to_string())
        }
    }
}

pub fn handle_select_command(
    config: &AppConfig,
    text: Option<&str>,
    category: Option<&str>,
    mode: Option<SelectionMode>,
    catalog: Option<&Path>,
) -> Result<()> {
    let result = resolve_goal_account(config, text, category, mode, catalog);
    print_json(&result)
}
