//! Goal-account selection
//!
//! Picks a representative influencer for a piece of user text:
//! - classifier: maps text to a category by keyword containment
//! - catalog: the immutable keyword and roster tables
//! - hash: stable hashing used by deterministic picks
//!
//! [`InfluencerSelector::get_goal_account`] is the entry point callers use.
//! It never fails; faults come back as a `success: false` [`GoalAccount`]
//! that still carries a usable profile.

pub mod catalog;
pub mod classifier;
pub mod hash;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;
use tracing::error;
use tracing::warn;

pub use catalog::InfluencerCatalog;
pub use classifier::classify;
pub use hash::stable_hash;

use crate::errors::SpreadItError;
use crate::models::Category;
use crate::models::Profile;
use crate::models::SelectionMode;
use crate::models::SelectionResult;
use crate::Result;

/// Response printed by `spreadit select`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalAccount {
    pub success: bool,
    pub category: Category,
    pub account: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GoalAccount {
    pub fn selected(result: SelectionResult) -> Self {
        Self {
            success: true,
            category: result.category,
            account: result.profile,
            error: None,
        }
    }

    /// Failure result carrying a fallback account in the default category
    pub fn fallback(account: Profile, error: impl Into<String>) -> Self {
        Self {
            success: false,
            category: Category::DEFAULT,
            account,
            error: Some(error.into()),
        }
    }
}

/// Classifies text and draws goal accounts from an [`InfluencerCatalog`]
#[derive(Debug, Clone)]
pub struct InfluencerSelector {
    catalog: InfluencerCatalog,
}

impl InfluencerSelector {
    pub fn new(catalog: InfluencerCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &InfluencerCatalog {
        &self.catalog
    }

    /// Classify `text` into a category
    pub fn classify(&self, text: Option<&str>) -> Category {
        let category = classify(&self.catalog, text);
        let keyword = text.and_then(|t| classifier::matched_keyword(&self.catalog, category, t));
        if let Some(keyword) = keyword {
            debug!("Classified as '{}' on keyword '{}'", category, keyword);
        }
        category
    }

    /// Pick a profile from the roster of `category`
    pub fn select(
        &self,
        category: Category,
        text: Option<&str>,
        mode: SelectionMode,
    ) -> Result<Profile> {
        self.select_with_rng(category, text, mode, &mut rand::thread_rng())
    }

    /// Same as [`select`](Self::select) with a caller-supplied random source
    pub fn select_with_rng<R: Rng + ?Sized>(
        &self,
        category: Category,
        text: Option<&str>,
        mode: SelectionMode,
        rng: &mut R,
    ) -> Result<Profile> {
        let (_, roster) = self.resolve_roster(category)?;
        pick(roster, text, mode, rng)
            .ok_or_else(|| SpreadItError::EmptyRoster(category.to_string()))
    }

    /// Resolve the category whose roster will actually be drawn from.
    ///
    /// A missing or empty roster falls back to the default category.
    pub fn resolve_roster(&self, category: Category) -> Result<(Category, &[Profile])> {
        if let Some(roster) = self.catalog.roster(category) {
            return Ok((category, roster));
        }
        if category != Category::DEFAULT {
            warn!(
                "No profiles configured for '{}', falling back to '{}'",
                category,
                Category::DEFAULT
            );
        }
        self.catalog
            .roster(Category::DEFAULT)
            .map(|roster| (Category::DEFAULT, roster))
            .ok_or_else(|| SpreadItError::EmptyRoster(Category::DEFAULT.to_string()))
    }

    /// Select a goal account for `text`, or for an explicit `category` tag.
    ///
    /// An explicit tag skips classification. Unknown tags resolve to the
    /// default category.
    pub fn get_goal_account(
        &self,
        category: Option<&str>,
        text: Option<&str>,
        mode: SelectionMode,
    ) -> GoalAccount {
        self.get_goal_account_with_rng(category, text, mode, &mut rand::thread_rng())
    }

    pub fn get_goal_account_with_rng<R: Rng + ?Sized>(
        &self,
        category: Option<&str>,
        text: Option<&str>,
        mode: SelectionMode,
        rng: &mut R,
    ) -> GoalAccount {
        match self.try_goal_account(category, text, mode, rng) {
            Ok(result) => GoalAccount::selected(result),
            Err(e) => {
                error!("Goal account selection failed: {}", e);
                GoalAccount::fallback(self.catalog.default_profile().clone(), e.to_string())
            }
        }
    }

    fn try_goal_account<R: Rng + ?Sized>(
        &self,
        category: Option<&str>,
        text: Option<&str>,
        mode: SelectionMode,
        rng: &mut R,
    ) -> Result<SelectionResult> {
        let requested = match category.map(str::trim).filter(|c| !c.is_empty()) {
            Some(tag) => tag.parse::<Category>().unwrap_or_else(|_| {
                warn!("Unknown category '{}', using '{}'", tag, Category::DEFAULT);
                Category::DEFAULT
            }),
            None => self.classify(text),
        };

        let (resolved, roster) = self.resolve_roster(requested)?;
        let profile = pick(roster, text, mode, rng)
            .ok_or_else(|| SpreadItError::EmptyRoster(resolved.to_string()))?;

        debug!(
            "Selected {} from '{}' ({} mode, {} candidates)",
            profile.handle,
            resolved,
            mode,
            roster.len()
        );

        Ok(SelectionResult {
            category: resolved,
            profile,
        })
    }
}

fn pick<R: Rng + ?Sized>(
    roster: &[Profile],
    text: Option<&str>,
    mode: SelectionMode,
    rng: &mut R,
) -> Option<Profile> {
    match mode {
        SelectionMode::Random => roster.choose(rng).cloned(),
        SelectionMode::Deterministic => {
            hash::stable_index(text.unwrap_or(""), roster.len()).map(|idx| roster[idx].clone())
        }
    }
}
