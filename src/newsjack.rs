//! Newsjacking: rewrite a post around a current trend and a goal account

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use tracing::info;
use tracing::warn;

use crate::errors::SpreadItError;
use crate::llm::LlmService;
use crate::llm::NewsjackPrompts;
use crate::Result;

/// Publishing target, used to size the rewrite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
    Tiktok,
    Youtube,
}

impl Platform {
    /// Maximum caption/post length in characters
    #[must_use]
    pub const fn text_limit(&self) -> usize {
        match self {
            Platform::Facebook => 63_206,
            Platform::Instagram => 2_200,
            Platform::Twitter => 280,
            Platform::Linkedin => 3_000,
            Platform::Tiktok => 150,
            Platform::Youtube => 5_000,
        }
    }

    /// Maximum number of hashtags, when the platform enforces one
    #[must_use]
    pub const fn hashtag_limit(&self) -> Option<usize> {
        match self {
            Platform::Instagram => Some(30),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
        }
    }

    /// Parse a platform name, defaulting to Facebook for unknown names
    pub fn parse_or_default(name: Option<&str>) -> Self {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => name.parse().unwrap_or_else(|_| {
                warn!("Unknown platform '{}', using {}", name, Platform::default());
                Platform::default()
            }),
            None => Platform::default(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = SpreadItError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "facebook" | "fb" => Ok(Platform::Facebook),
            "instagram" | "ig" => Ok(Platform::Instagram),
            "twitter" | "x" => Ok(Platform::Twitter),
            "linkedin" => Ok(Platform::Linkedin),
            "tiktok" => Ok(Platform::Tiktok),
            "youtube" => Ok(Platform::Youtube),
            other => Err(SpreadItError::ConfigError(format!("unknown platform '{other}'"))),
        }
    }
}

/// Inputs of one rewrite
#[derive(Debug, Clone)]
pub struct NewsjackRequest {
    pub user_text: String,
    pub trends: String,
    pub influencer: String,
    pub platform: Platform,
}

/// Structured rewrite returned by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsjackPost {
    pub corrected_text: String,
    #[serde(default)]
    pub vibes_section: String,
    #[serde(default)]
    pub mention: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub final_post: String,
}

impl NewsjackPost {
    /// Whether the post respects the platform's length and hashtag limits
    #[must_use]
    pub fn fits(&self, platform: Platform) -> bool {
        let length_ok = self.final_post.chars().count() <= platform.text_limit();
        let tags_ok = platform
            .hashtag_limit()
            .map_or(true, |limit| self.hashtags.len() <= limit);
        length_ok && tags_ok
    }
}

/// Response printed by `spreadit newsjack`
#[derive(Debug, Serialize)]
pub struct NewsjackResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<NewsjackPost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within_limit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NewsjackResponse {
    pub fn success(post: NewsjackPost, platform: Platform) -> Self {
        let within_limit = post.fits(platform);
        Self {
            success: true,
            data: Some(post),
            within_limit: Some(within_limit),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            within_limit: None,
            error: Some(message.into()),
        }
    }
}

/// Render the system and user prompts for `request`
pub fn build_prompts(request: &NewsjackRequest) -> Result<(String, String)> {
    let platform = request.platform;
    let mut values: HashMap<&str, String> = HashMap::new();
    values.insert("user_text", request.user_text.clone());
    values.insert("trends", request.trends.clone());
    values.insert("influencer", request.influencer.clone());
    values.insert("platform", platform.to_string());
    values.insert("max_length", platform.text_limit().to_string());
    values.insert(
        "hashtag_limit",
        platform.hashtag_limit().unwrap_or(10).to_string(),
    );

    Ok((
        NewsjackPrompts::system().render(&values)?,
        NewsjackPrompts::user().render(&values)?,
    ))
}

/// Parse the model's reply, tolerating a fenced ```json block
pub fn parse_post(content: &str) -> Result<NewsjackPost> {
    let trimmed = content.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    let mut post: NewsjackPost = serde_json::from_str(body)?;
    if post.final_post.trim().is_empty() {
        return Err(SpreadItError::LlmError("model returned an empty final_post".to_string()));
    }
    let mention = post.mention.trim();
    if !mention.is_empty() && !mention.starts_with('@') {
        post.mention = format!("@{mention}");
    }
    Ok(post)
}

/// Rewrites posts through an [`LlmService`]
pub struct Newsjacker {
    llm: LlmService,
}

impl Newsjacker {
    pub fn new(llm: LlmService) -> Self {
        Self { llm }
    }

    /// Rewrite `request.user_text` for `request.platform`
    pub async fn rewrite(&self, request: &NewsjackRequest) -> Result<NewsjackPost> {
        let (system, user) = build_prompts(request)?;
        info!(
            "Newsjacking post for {} with {} ({})",
            request.platform,
            request.influencer,
            self.llm.model()
        );

        let content = self.llm.complete_json(&system, &user).await?;
        let post = parse_post(&content)?;

        if !post.fits(request.platform) {
            warn!(
                "Rewrite exceeds {} limits ({} chars, {} hashtags)",
                request.platform,
                post.final_post.chars().count(),
                post.hashtags.len()
            );
        }
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(platform: Platform) -> NewsjackRequest {
        NewsjackRequest {
            user_text: "i finaly finished my davinci montage".to_string(),
            trends: "Everyone is talking about the solar eclipse".to_string(),
            influencer: "@waqasqazi".to_string(),
            platform,
        }
    }

    #[test]
    fn test_platform_parsing() {
        assert_eq!("X".parse::<Platform>().unwrap(), Platform::Twitter);
        assert_eq!(Platform::parse_or_default(Some("myspace")), Platform::Facebook);
        assert_eq!(Platform::parse_or_default(None), Platform::Facebook);
        assert_eq!(Platform::parse_or_default(Some(" TikTok ")), Platform::Tiktok);
    }

    #[test]
    fn test_prompts_carry_inputs_and_limits() {
        let (system, user) = build_prompts(&request(Platform::Twitter)).unwrap();
        assert!(system.contains("for twitter"));
        assert!(system.contains("exceed 280 characters"));
        assert!(!system.contains("{{"));
        assert!(user.contains("USER TEXT: i finaly finished my davinci montage"));
        assert!(user.contains("INFLUENTIAL ACCOUNT: @waqasqazi"));
        assert!(user.contains("TARGET PLATFORM: twitter"));
    }

    #[test]
    fn test_instagram_hashtag_limit_in_prompt() {
        let (system, _) = build_prompts(&request(Platform::Instagram)).unwrap();
        assert!(system.contains("at most 30 hashtags"));
    }

    #[test]
    fn test_placeholders_in_user_input_are_kept_verbatim() {
        let request = NewsjackRequest {
            user_text: "my template uses {{platform}} and {{max_length}} literally".to_string(),
            trends: "trend {{influencer}}".to_string(),
            influencer: "@waqasqazi".to_string(),
            platform: Platform::Twitter,
        };
        let (_, user) = build_prompts(&request).unwrap();
        assert!(user.contains(
            "USER TEXT: my template uses {{platform}} and {{max_length}} literally"
        ));
        assert!(user.contains("CURRENT TREND: trend {{influencer}}"));
        assert!(user.contains("TARGET PLATFORM: twitter"));
    }

    #[test]
    fn test_parse_post_plain_and_fenced() {
        let raw = r##"{"corrected_text":"I finally finished my DaVinci montage","vibes_section":"🌒 Even the moon needed a cut","mention":"waqasqazi","hashtags":["#davinci","#eclipse"],"final_post":"I finally finished my DaVinci montage 🌒"}"##;
        let post = parse_post(raw).unwrap();
        assert_eq!(post.mention, "@waqasqazi");
        assert_eq!(post.hashtags.len(), 2);

        let fenced = format!("```json\n{raw}\n```");
        assert_eq!(parse_post(&fenced).unwrap(), post);
    }

    #[test]
    fn test_parse_post_rejects_empty_final_post() {
        let err = parse_post(r#"{"corrected_text":"x","final_post":"  "}"#).unwrap_err();
        assert!(matches!(err, SpreadItError::LlmError(_)));
        assert!(parse_post("not json").is_err());
    }

    #[test]
    fn test_fits_platform_limits() {
        let mut post = NewsjackPost {
            corrected_text: String::new(),
            vibes_section: String::new(),
            mention: String::new(),
            hashtags: vec!["#a".to_string(); 31],
            final_post: "é".repeat(280),
        };
        assert!(post.fits(Platform::Twitter));
        assert!(!post.fits(Platform::Instagram));
        post.hashtags.truncate(30);
        assert!(post.fits(Platform::Instagram));
        post.final_post.push('!');
        assert!(!post.fits(Platform::Twitter));
    }

    #[test]
    fn test_response_shape() {
        let json = serde_json::to_value(NewsjackResponse::error("boom")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json.get("data").is_none());
    }
}
