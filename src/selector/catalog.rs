//! Influencer catalog: keyword sets and rosters per category
//!
//! The catalog is plain data. A copy ships inside the binary
//! (`data/influencers.toml`) and operators can point the tool at their own
//! file instead. Once built, a catalog is never mutated.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use tracing::warn;

use crate::errors::SpreadItError;
use crate::models::Category;
use crate::models::Profile;
use crate::Result;

/// Catalog data compiled into the binary
const BUILTIN_CATALOG: &str = include_str!("../../data/influencers.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: BTreeMap<String, CategoryEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct CategoryEntry {
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    profiles: Vec<Profile>,
}

/// Immutable keyword and roster tables
#[derive(Debug, Clone)]
pub struct InfluencerCatalog {
    keywords: HashMap<Category, Vec<String>>,
    rosters: HashMap<Category, Vec<Profile>>,
    default_profile: Profile,
}

impl InfluencerCatalog {
    /// Load the catalog embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load a catalog from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!("Loading influencer catalog from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Load the file at `path` if given, otherwise the built-in catalog
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;

        let mut keywords = HashMap::new();
        let mut rosters = HashMap::new();
        for (tag, entry) in file.categories {
            let Ok(category) = tag.parse::<Category>() else {
                warn!("Ignoring unknown category '{}' in catalog", tag);
                continue;
            };
            keywords.insert(category, entry.keywords);
            rosters.insert(category, entry.profiles);
        }

        Self::from_tables(keywords, rosters)
    }

    /// Build a catalog from in-memory tables.
    ///
    /// Keywords are trimmed and lowercased, blank keywords and profiles with a
    /// blank handle are dropped, and duplicate handles within a roster keep
    /// their first occurrence. Fails if the default category ends up with no
    /// profiles, since every fallback path draws from it.
    pub fn from_tables(
        keywords: HashMap<Category, Vec<String>>,
        rosters: HashMap<Category, Vec<Profile>>,
    ) -> Result<Self> {
        let keywords: HashMap<Category, Vec<String>> = keywords
            .into_iter()
            .map(|(category, words)| (category, normalize_keywords(words)))
            .collect();

        let rosters: HashMap<Category, Vec<Profile>> = rosters
            .into_iter()
            .map(|(category, profiles)| (category, dedup_profiles(category, profiles)))
            .collect();

        let default_profile = rosters
            .get(&Category::DEFAULT)
            .and_then(|roster| roster.first())
            .cloned()
            .ok_or_else(|| SpreadItError::EmptyRoster(Category::DEFAULT.to_string()))?;

        for category in Category::all() {
            if rosters.get(category).map_or(true, Vec::is_empty) {
                warn!(
                    "Roster for '{}' is missing or empty, selections will use '{}'",
                    category,
                    Category::DEFAULT
                );
            }
        }

        Ok(Self {
            keywords,
            rosters,
            default_profile,
        })
    }

    /// Lowercase substring triggers for `category`
    #[must_use]
    pub fn keywords(&self, category: Category) -> &[String] {
        self.keywords.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Roster for `category`, `None` when missing or empty
    #[must_use]
    pub fn roster(&self, category: Category) -> Option<&[Profile]> {
        self.rosters
            .get(&category)
            .map(Vec::as_slice)
            .filter(|roster| !roster.is_empty())
    }

    /// First profile of the default category
    #[must_use]
    pub fn default_profile(&self) -> &Profile {
        &self.default_profile
    }

    /// Total number of profiles across all rosters
    #[must_use]
    pub fn profile_count(&self) -> usize {
        self.rosters.values().map(Vec::len).sum()
    }

    /// Whether `profile` belongs to the roster of `category`
    #[must_use]
    pub fn contains(&self, category: Category, profile: &Profile) -> bool {
        self.roster(category)
            .is_some_and(|roster| roster.iter().any(|p| p == profile))
    }
}

fn normalize_keywords(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

fn dedup_profiles(category: Category, profiles: Vec<Profile>) -> Vec<Profile> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(profiles.len());
    for profile in profiles {
        if profile.handle.trim().is_empty() {
            warn!("Dropping profile '{}' in '{}': empty handle", profile.name, category);
            continue;
        }
        if !seen.insert(profile.handle.to_lowercase()) {
            warn!("Dropping duplicate handle {} in '{}'", profile.handle, category);
            continue;
        }
        kept.push(profile);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = InfluencerCatalog::builtin().unwrap();
        for category in Category::all() {
            assert!(catalog.roster(*category).is_some(), "{category} has no roster");
        }
        assert_eq!(catalog.default_profile().handle, "@mkbhd");
        assert!(catalog.keywords(Category::VideoEditing).contains(&"davinci".to_string()));
    }

    #[test]
    fn test_keywords_are_normalized() {
        let catalog = InfluencerCatalog::from_toml_str(
            r#"
            [categories.photography]
            keywords = ["  Bokeh ", "", "LENS", "lens"]

            [[categories.tech_ai.profiles]]
            handle = "@a"
            name = "A"
            style = "a"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.keywords(Category::Photography), ["bokeh", "lens"]);
        assert!(catalog.keywords(Category::LifestyleHustle).is_empty());
    }

    #[test]
    fn test_duplicate_and_blank_handles_are_dropped() {
        let mut rosters = HashMap::new();
        rosters.insert(
            Category::TechAi,
            vec![
                Profile::new("@mkbhd", "Marques", "first"),
                Profile::new("@MKBHD", "Marques", "second"),
                Profile::new("  ", "Nobody", "blank"),
                Profile::new("@levelsio", "Pieter", "third"),
            ],
        );
        let catalog = InfluencerCatalog::from_tables(HashMap::new(), rosters).unwrap();

        let roster = catalog.roster(Category::TechAi).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].style, "first");
        assert_eq!(roster[1].handle, "@levelsio");
    }

    #[test]
    fn test_empty_default_roster_is_rejected() {
        let err = InfluencerCatalog::from_toml_str(
            r#"
            [categories.tech_ai]
            keywords = []
            profiles = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SpreadItError::EmptyRoster(ref c) if c == "tech_ai"));
    }

    #[test]
    fn test_empty_non_default_roster_is_accepted() {
        let catalog = InfluencerCatalog::from_toml_str(
            r#"
            [categories.photography]
            keywords = ["photo"]
            profiles = []

            [[categories.tech_ai.profiles]]
            handle = "@a"
            name = "A"
            style = "a"
            "#,
        )
        .unwrap();
        assert!(catalog.roster(Category::Photography).is_none());
        assert_eq!(catalog.profile_count(), 1);
    }

    #[test]
    fn test_unknown_categories_are_ignored() {
        let catalog = InfluencerCatalog::from_toml_str(
            r#"
            [[categories.cooking.profiles]]
            handle = "@chef"
            name = "Chef"
            style = "food"

            [[categories.tech_ai.profiles]]
            handle = "@a"
            name = "A"
            style = "a"
            "#,
        )
        .unwrap();
        assert_eq!(catalog.profile_count(), 1);
    }

    #[test]
    fn test_from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            r#"
            [[categories.tech_ai.profiles]]
            handle = "@file"
            name = "File"
            style = "from disk"
            "#,
        )
        .unwrap();

        let catalog = InfluencerCatalog::load(Some(&path)).unwrap();
        assert_eq!(catalog.default_profile().handle, "@file");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = InfluencerCatalog::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, SpreadItError::Io(_)));
    }
}
