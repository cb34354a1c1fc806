use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpreadItError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Roster for category '{0}' is empty")]
    EmptyRoster(String),

    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("Probe error: {0}")]
    ProbeError(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpreadItError>;
