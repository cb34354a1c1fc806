use clap::Parser;
use spreadit::cli::Cli;
use spreadit::cli::Commands;
use spreadit::cli::NewsjackArgs;
use spreadit::config::AppConfig;
use spreadit::Result;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first
    let config = AppConfig::load(cli.config.as_deref())?;

    // Initialize logging with configuration; keep the guard alive until exit
    let _log_guard = spreadit::logging::init_logging_with_config(&config.logging, cli.verbose)?;
    debug!("Configuration loaded (model {})", config.llm_model());

    match cli.command {
        Commands::Select {
            text,
            category,
            mode,
            catalog,
        } => spreadit::cli::handle_select_command(
            &config,
            text.as_deref(),
            category.as_deref(),
            mode,
            catalog.as_deref(),
        ),
        Commands::Newsjack {
            user_text,
            trends,
            influencer,
            platform,
            catalog,
        } => {
            let args = NewsjackArgs {
                user_text: &user_text,
                trends: &trends,
                influencer: influencer.as_deref(),
                platform: platform.as_deref(),
                catalog: catalog.as_deref(),
            };
            spreadit::cli::handle_newsjack_command(&config, args).await
        }
        Commands::Probe { path } => spreadit::cli::handle_probe_command(&config, &path).await,
        Commands::Categories { catalog } => {
            spreadit::cli::handle_categories_command(&config, catalog.as_deref())
        }
        Commands::Config => spreadit::cli::handle_config_command(&config),
    }
}
