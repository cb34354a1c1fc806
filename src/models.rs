//! Core data types shared by the selector, the CLI and the collaborators

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::errors::SpreadItError;

/// Topical bucket a goal account belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    VideoEditing,
    Photography,
    TechAi,
    LifestyleHustle,
}

impl Category {
    /// Category used when nothing else applies
    pub const DEFAULT: Category = Category::TechAi;

    /// Categories tested by the classifier, highest priority first.
    /// `TechAi` is absent because it is the fallback.
    pub const CLASSIFICATION_ORDER: [Category; 3] = [
        Category::VideoEditing,
        Category::Photography,
        Category::LifestyleHustle,
    ];

    /// All categories in display order
    #[must_use]
    pub const fn all() -> &'static [Category] {
        &[
            Category::VideoEditing,
            Category::Photography,
            Category::TechAi,
            Category::LifestyleHustle,
        ]
    }

    /// Wire tag, e.g. `video_editing`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::VideoEditing => "video_editing",
            Category::Photography => "photography",
            Category::TechAi => "tech_ai",
            Category::LifestyleHustle => "lifestyle_hustle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SpreadItError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "video_editing" => Ok(Category::VideoEditing),
            "photography" => Ok(Category::Photography),
            "tech_ai" => Ok(Category::TechAi),
            "lifestyle_hustle" => Ok(Category::LifestyleHustle),
            other => Err(SpreadItError::CatalogError(format!(
                "unknown category '{other}'"
            ))),
        }
    }
}

/// An influencer presented to the user as a reference account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub handle: String,
    pub name: String,
    pub style: String,
}

impl Profile {
    pub fn new(
        handle: impl Into<String>,
        name: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            handle: handle.into(),
            name: name.into(),
            style: style.into(),
        }
    }

    /// Profile reported when no catalog could be loaded at all
    #[must_use]
    pub fn last_resort() -> Self {
        Self::new(
            "@mkbhd",
            "Marques Brownlee",
            "Ultimate tech production quality (8K, robot arms)",
        )
    }
}

/// How a profile is drawn from a roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Uniform choice, differs between calls
    Random,
    /// Stable hash of the input text, same text gives the same profile
    #[default]
    Deterministic,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Random => f.write_str("random"),
            SelectionMode::Deterministic => f.write_str("deterministic"),
        }
    }
}

/// Output of one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionResult {
    pub category: Category,
    pub profile: Profile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_tag() {
        for category in Category::all() {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(&parsed, category);
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(
            " Photography ".parse::<Category>().unwrap(),
            Category::Photography
        );
        assert!("cooking".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_as_snake_case() {
        let json = serde_json::to_string(&Category::LifestyleHustle).unwrap();
        assert_eq!(json, "\"lifestyle_hustle\"");
    }

    #[test]
    fn test_classification_order_excludes_default() {
        assert!(!Category::CLASSIFICATION_ORDER.contains(&Category::DEFAULT));
    }
}
