//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use crate::models::SelectionMode;

#[derive(Parser)]
#[command(name = "spreadit")]
#[command(about = "Goal-account selection, newsjacking rewrites and media probing")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: configured level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick a goal account for a post and print it as JSON
    Select {
        /// Post text used to detect the category
        text: Option<String>,
        /// Explicit category, skips detection
        category: Option<String>,
        /// Selection mode (default: from configuration)
        #[arg(short, long, value_enum)]
        mode: Option<SelectionMode>,
        /// Influencer catalog file replacing the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Rewrite a post around a current trend and print the result as JSON
    Newsjack {
        /// Original post text
        user_text: String,
        /// Description of the current trend
        trends: String,
        /// Handle to mention (default: picked from the post text)
        influencer: Option<String>,
        /// Target platform (facebook, instagram, twitter, linkedin, tiktok, youtube)
        platform: Option<String>,
        /// Influencer catalog file used when picking a handle
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Report the duration of a media file as JSON
    Probe {
        /// Media file to inspect
        path: PathBuf,
    },
    /// List categories, keywords and rosters of the influencer catalog
    Categories {
        /// Influencer catalog file replacing the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Show current configuration
    Config,
}
