use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

/// Chat-completion provider settings. Without an API key the service still
/// starts, but recommendation requests answer 503.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub jwt: JwtConfig,
    pub llm: LlmConfig,
    pub seed_catalog: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "courseplan".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "courseplan-users".into()),
            ttl_minutes: parse_env("JWT_TTL_MINUTES").unwrap_or(60),
            refresh_ttl_minutes: parse_env("JWT_REFRESH_TTL_MINUTES").unwrap_or(60 * 24 * 14),
        };
        let llm = LlmConfig {
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4-turbo".into()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            timeout_secs: parse_env("OPENAI_TIMEOUT_SECS").unwrap_or(60),
        };
        Ok(Self {
            database_url,
            max_connections: parse_env("DATABASE_MAX_CONNECTIONS").unwrap_or(10),
            jwt,
            llm,
            seed_catalog: std::env::var("SEED_CATALOG")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn flag_parsing_defaults_to_enabled() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(parse_flag(""));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
    }
}
