//! Spreadit: helpers behind the Spread It social-media composer
//!
//! - `selector`: picks a goal influencer account for a post
//! - `newsjack`: rewrites a post around a trend through an LLM
//! - `probe`: measures media duration with ffprobe

pub mod cli;
pub mod config;
pub mod errors;
pub mod llm;
pub mod logging;
pub mod models;
pub mod newsjack;
pub mod probe;
pub mod selector;


pub use config::AppConfig;
pub use errors::*;
pub use models::Category;
pub use models::Profile;
pub use models::SelectionMode;
pub use models::SelectionResult;
pub use selector::GoalAccount;
pub use selector::InfluencerCatalog;
pub use selector::InfluencerSelector;
