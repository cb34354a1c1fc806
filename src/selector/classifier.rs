//! Keyword classification of free text into a category

use crate::models::Category;
use crate::selector::catalog::InfluencerCatalog;

/// Classify `text` into a category.
///
/// Categories are tested in [`Category::CLASSIFICATION_ORDER`]; the first one
/// with a keyword occurring in the lowercased text wins. Absent, blank or
/// unmatched text maps to [`Category::DEFAULT`].
#[must_use]
pub fn classify(catalog: &InfluencerCatalog, text: Option<&str>) -> Category {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return Category::DEFAULT;
    };

    let lowered = text.to_lowercase();
    Category::CLASSIFICATION_ORDER
        .into_iter()
        .find(|category| matches_any(&lowered, catalog.keywords(*category)))
        .unwrap_or(Category::DEFAULT)
}

/// First keyword of `category` found in `text`, for diagnostics
#[must_use]
pub fn matched_keyword<'a>(
    catalog: &'a InfluencerCatalog,
    category: Category,
    text: &str,
) -> Option<&'a str> {
    let lowered = text.to_lowercase();
    catalog
        .keywords(category)
        .iter()
        .find(|keyword| lowered.contains(keyword.as_str()))
        .map(String::as_str)
}

fn matches_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> InfluencerCatalog {
        InfluencerCatalog::builtin().unwrap()
    }

    #[test]
    fn test_absent_and_blank_text_default_to_tech_ai() {
        let catalog = catalog();
        assert_eq!(classify(&catalog, None), Category::TechAi);
        assert_eq!(classify(&catalog, Some("")), Category::TechAi);
        assert_eq!(classify(&catalog, Some("   \n\t")), Category::TechAi);
    }

    #[test]
    fn test_video_editing_examples() {
        let catalog = catalog();
        assert_eq!(
            classify(&catalog, Some("I need help with my DaVinci montage")),
            Category::VideoEditing
        );
        assert_eq!(
            classify(&catalog, Some("New REEL is live")),
            Category::VideoEditing
        );
    }

    #[test]
    fn test_lifestyle_hustle_example() {
        let catalog = catalog();
        assert_eq!(
            classify(
                &catalog,
                Some("Trying to scale my business with a hustle mindset")
            ),
            Category::LifestyleHustle
        );
    }

    #[test]
    fn test_photography_example() {
        let catalog = catalog();
        assert_eq!(
            classify(&catalog, Some("Shot this on my Nikon at golden hour")),
            Category::Photography
        );
    }

    #[test]
    fn test_video_outranks_photography_and_hustle() {
        let catalog = catalog();
        assert_eq!(
            classify(&catalog, Some("photo and video tips for my startup")),
            Category::VideoEditing
        );
        assert_eq!(
            classify(&catalog, Some("bokeh shots that make money")),
            Category::Photography
        );
    }

    #[test]
    fn test_no_keyword_defaults_to_tech_ai() {
        let catalog = catalog();
        assert_eq!(
            classify(&catalog, Some("Benchmarking the new GPU for local LLM inference")),
            Category::TechAi
        );
    }

    #[test]
    fn test_matched_keyword_reports_first_hit() {
        let catalog = catalog();
        assert_eq!(
            matched_keyword(&catalog, Category::VideoEditing, "My DaVinci montage"),
            Some("montage")
        );
        assert_eq!(
            matched_keyword(&catalog, Category::Photography, "nothing here"),
            None
        );
    }
}
