//! CLI command handlers module
//!
//! One file per subcommand:
//! - select: goal-account selection
//! - newsjack: post rewriting through the LLM
//! - probe: media duration
//! - info: catalog and configuration display

pub mod info;
pub mod newsjack;
pub mod probe;
pub mod select;

// Re-export all public handlers
pub use info::*;
pub use newsjack::*;
pub use probe::*;
pub use select::*;
