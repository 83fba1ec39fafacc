use anyhow::{bail, Context, Result};

use crate::experience::chunker::DEFAULT_MAX_CHARS;

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_ALLOWED_ORIGIN: &str = "https://rezmay.co";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub openai_model: String,
    /// Shared secret for the `Authorization: Bearer` check. Empty disables it.
    pub basic_auth_token: String,
    pub cors_allowed_origin: String,
    pub port: u16,
    pub rust_log: String,
    /// Character budget per fragment sent to the extraction backend.
    pub chunk_max_chars: usize,
    pub extraction_timeout_secs: u64,
    /// Append a trailing comma to `company` when a location is also present.
    pub company_location_comma: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let chunk_max_chars = parse_env("CHUNK_MAX_CHARS", DEFAULT_MAX_CHARS)?;
        if chunk_max_chars == 0 {
            bail!("CHUNK_MAX_CHARS must be greater than zero");
        }

        let extraction_timeout_secs = parse_env("EXTRACTION_TIMEOUT_SECS", 30u64)?;
        if extraction_timeout_secs == 0 {
            bail!("EXTRACTION_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_api_url: optional_env("OPENAI_API_URL", DEFAULT_OPENAI_API_URL),
            openai_model: optional_env("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            basic_auth_token: optional_env("BASIC_AUTH_TOKEN", ""),
            cors_allowed_origin: optional_env("CORS_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN),
            port: parse_env("PORT", 8080u16)?,
            rust_log: optional_env("RUST_LOG", "info"),
            chunk_max_chars,
            extraction_timeout_secs,
            company_location_comma: parse_env("COMPANY_LOCATION_COMMA", true)?,
        })
    }

    /// Expected `Authorization` header value, or `None` when auth is disabled.
    pub fn expected_authorization(&self) -> Option<String> {
        let token = self.basic_auth_token.trim();
        (!token.is_empty()).then(|| format!("Bearer {token}"))
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        openai_api_key: "test-key".to_string(),
        openai_api_url: DEFAULT_OPENAI_API_URL.to_string(),
        openai_model: DEFAULT_OPENAI_MODEL.to_string(),
        basic_auth_token: String::new(),
        cors_allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        port: 8080,
        rust_log: "info".to_string(),
        chunk_max_chars: DEFAULT_MAX_CHARS,
        extraction_timeout_secs: 30,
        company_location_comma: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_disabled_when_token_empty() {
        let config = test_config();
        assert_eq!(config.expected_authorization(), None);
    }

    #[test]
    fn test_auth_header_built_from_token() {
        let config = Config {
            basic_auth_token: "s3cret".to_string(),
            ..test_config()
        };
        assert_eq!(
            config.expected_authorization().as_deref(),
            Some("Bearer s3cret")
        );
    }
}
