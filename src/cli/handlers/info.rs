//! Information display handlers (catalog, config)

use std::path::Path;

use crate::cli::handlers::select::load_selector;
use crate::cli::output::*;
use crate::AppConfig;
use crate::Result;

pub fn handle_categories_command(config: &AppConfig, catalog: Option<&Path>) -> Result<()> {
    let selector = load_selector(config, catalog)?;
    match catalog.or_else(|| config.catalog_path()) {
        Some(path) => print_info(&format!("Catalog: {}", path.display())),
        None => print_info("Catalog: built-in"),
    }
    print_catalog(selector.catalog());
    Ok(())
}

pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    if !config.has_llm_key() {
        print_warning(
            "No LLM API key configured; set OPENAI_API_KEY or llm.api_key to use newsjack",
        );
    }
    Ok(())
}
