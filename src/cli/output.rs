//! CLI output formatting utilities
//!
//! Machine-facing commands print exactly one JSON line on stdout; the
//! human-facing listings use the helpers below.

use serde::Serialize;

use crate::models::Category;
use crate::selector::InfluencerCatalog;
use crate::AppConfig;
use crate::Result;

/// Print `value` as a single JSON line on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Safely truncate a string at character boundary (not byte boundary)
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Print categories with their keywords and rosters
pub fn print_catalog(catalog: &InfluencerCatalog) {
    println!("📋 Influencer catalog ({} profiles):", catalog.profile_count());
    println!();

    for category in Category::all() {
        let marker = if *category == Category::DEFAULT {
            " (default)"
        } else {
            ""
        };
        println!("🏷️  {category}{marker}");

        let keywords = catalog.keywords(*category);
        if keywords.is_empty() {
            println!("  Keywords: -");
        } else {
            println!("  Keywords: {}", keywords.join(", "));
        }

        match catalog.roster(*category) {
            Some(roster) => {
                for profile in roster {
                    println!(
                        "  - {} | {} | {}",
                        profile.handle,
                        profile.name,
                        truncate_str(&profile.style, 60)
                    );
                }
            }
            None => println!("  - (empty, falls back to {})", Category::DEFAULT),
        }
        println!();
    }
}

pub fn print_config(config: &AppConfig) {
    println!("📋 Spreadit Configuration:");
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    match &config.logging.log_dir {
        Some(dir) => println!("  Log dir: {}", dir.display()),
        None => println!("  Log dir: (console only)"),
    }
    println!();

    println!("🧠 LLM:");
    println!("  Endpoint: {}", config.llm_endpoint());
    println!("  Model: {}", config.llm_model());
    println!("  Temperature: {}", config.llm.temperature);
    println!("  Timeout: {}s", config.llm.timeout_secs);
    println!(
        "  API key: {}",
        if config.has_llm_key() {
            "***masked***"
        } else {
            "(not set)"
        }
    );
    println!();

    println!("🎯 Selector:");
    println!("  Mode: {}", config.selection_mode());
    match config.catalog_path() {
        Some(path) => println!("  Catalog: {}", path.display()),
        None => println!("  Catalog: (built-in)"),
    }
    println!();

    println!("🎬 Probe:");
    println!("  ffprobe: {}", config.probe.ffprobe_path);
    println!("  Timeout: {}s", config.probe.timeout_secs);
}

/// Print colored output functions
pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_warning(msg: &str) {
    eprintln!("⚠️  {msg}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_multibyte() {
        assert_eq!(truncate_str("Lumières néons", 8), "Lumières...");
        assert_eq!(truncate_str("short", 10), "short");
    }
}
