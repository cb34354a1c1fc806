//! Newsjack handler

use std::path::Path;

use tracing::error;
use tracing::info;

use crate::cli::handlers::select::resolve_goal_account;
use crate::cli::output::print_json;
use crate::llm::LlmService;
use crate::models::SelectionMode;
use crate::newsjack::NewsjackRequest;
use crate::newsjack::NewsjackResponse;
use crate::newsjack::Newsjacker;
use crate::newsjack::Platform;
use crate::AppConfig;
use crate::Result;

pub struct NewsjackArgs<'a> {
    pub user_text: &'a str,
    pub trends: &'a str,
    pub influencer: Option<&'a str>,
    pub platform: Option<&'a str>,
    pub catalog: Option<&'a Path>,
}

/// Handle to mention: the given one, or a goal account picked from the text
pub fn resolve_influencer(config: &AppConfig, args: &NewsjackArgs<'_>) -> String {
    if let Some(handle) = args.influencer.map(str::trim).filter(|h| !h.is_empty()) {
        return handle.to_string();
    }

    let picked = resolve_goal_account(
        config,
        Some(args.user_text),
        None,
        Some(SelectionMode::Deterministic),
        args.catalog,
    );
    info!(
        "No influencer given, picked {} from {}",
        picked.account.handle, picked.category
    );
    picked.account.handle
}

pub async fn handle_newsjack_command(config: &AppConfig, args: NewsjackArgs<'_>) -> Result<()> {
    let platform = Platform::parse_or_default(args.platform);
    let request = NewsjackRequest {
        user_text: args.user_text.to_string(),
        trends: args.trends.to_string(),
        influencer: resolve_influencer(config, &args),
        platform,
    };

    let response = match run_newsjack(config, &request).await {
        Ok(response) => response,
        Err(e) => {
            error!("Newsjack failed: {}", e);
            NewsjackResponse::error(e.to_string())
        }
    };
    print_json(&response)
}

async fn run_newsjack(config: &AppConfig, request: &NewsjackRequest) -> Result<NewsjackResponse> {
    let newsjacker = Newsjacker::new(LlmService::new(&config.llm)?);
    let post = newsjacker.rewrite(request).await?;
    Ok(NewsjackResponse::success(post, request.platform))
}
