//! Prompt templates for post rewriting
//!
//! Templates mark variables as `{{name}}`. They are parsed once into
//! segments and rendered in a single pass, so substituted values are
//! emitted verbatim even when they contain `{{...}}` themselves.

use std::collections::HashMap;

use crate::errors::SpreadItError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Var(String),
}

/// Parsed `{{var}}` template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    pub fn new(template: &str) -> Self {
        Self {
            segments: parse_segments(template),
        }
    }

    /// Variable names in order of first appearance
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Var(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }

    /// Variables that `values` does not provide
    #[must_use]
    pub fn missing(&self, values: &HashMap<&str, String>) -> Vec<&str> {
        self.variables()
            .into_iter()
            .filter(|name| !values.contains_key(name))
            .collect()
    }

    /// Substitute every variable from `values`.
    ///
    /// Fails when a variable has no value.
    pub fn render(&self, values: &HashMap<&str, String>) -> Result<String> {
        let missing = self.missing(values);
        if !missing.is_empty() {
            return Err(SpreadItError::LlmError(format!(
                "prompt variables without a value: {}",
                missing.join(", ")
            )));
        }

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Var(name) => {
                    if let Some(value) = values.get(name.as_str()) {
                        out.push_str(value);
                    }
                }
            }
        }
        Ok(out)
    }
}

fn is_variable_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Split `template` into literal text and `{{name}}` variables.
/// Braces around anything that is not a plain identifier stay literal.
fn parse_segments(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        let after = &rest[open + 2..];
        match after.find("}}") {
            Some(close) if is_variable_name(&after[..close]) => {
                text.push_str(&rest[..open]);
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Var(after[..close].to_string()));
                rest = &after[close + 2..];
            }
            _ => {
                text.push_str(&rest[..open + 2]);
                rest = after;
            }
        }
    }
    text.push_str(rest);
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    segments
}

/// Newsjacking prompt templates
pub struct NewsjackPrompts;

impl NewsjackPrompts {
    /// System prompt laying out the rewrite rules and the JSON reply shape
    #[must_use]
    pub fn system() -> PromptTemplate {
        PromptTemplate::new(
            r##"You are a social media expert who has mastered the art of newsjacking.

RULES:
1. MAIN TEXT: Only fix the grammar of the user's text. Do not change the tone and do not make it sound corporate. Keep it human and imperfect.
2. THE WINK: At the end, add a separate paragraph (with an emoji) drawing an absurd or funny link between the text and the CURRENT TREND provided.
3. GOAL ACCOUNT: Find an excuse to mention the INFLUENTIAL ACCOUNT provided (e.g. "Trying to channel the energy of @...").
4. HASHTAGS: Mix tags about the post's subject AND tags about the trend, even if off-topic. Use at most {{hashtag_limit}} hashtags.
5. PLATFORM: Adapt length and style for {{platform}}. The final post must not exceed {{max_length}} characters.

Reply with strict JSON in this shape:
{
  "corrected_text": "Corrected text...",
  "vibes_section": "Link to the trend with emoji...",
  "mention": "@influencer_handle",
  "hashtags": ["#tag1", "#tag2", "#tag3"],
  "final_post": "FULL POST READY TO PUBLISH"
}"##,
        )
    }

    /// User prompt carrying the inputs
    #[must_use]
    pub fn user() -> PromptTemplate {
        PromptTemplate::new(
            r"USER TEXT: {{user_text}}
CURRENT TREND: {{trends}}
INFLUENTIAL ACCOUNT: {{influencer}}
TARGET PLATFORM: {{platform}}",
        )
    }
}
