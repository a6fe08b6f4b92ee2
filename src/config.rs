use std::env;

use anyhow::{Context, bail};

const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60 * 24;
/// One year.
pub const MAX_TOKEN_TTL_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub auth: AuthConfig,
}

/// Signing settings for bearer tokens.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            port,
            database_url,
            host,
            auth: AuthConfig::from_env()?,
        })
    }
}

impl AuthConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET is not set")?;
        let token_ttl_minutes = parse_token_ttl(env::var("TOKEN_TTL_MINUTES").ok().as_deref())?;
        Ok(Self {
            jwt_secret,
            token_ttl_minutes,
        })
    }
}

/// Unset means one day; anything else must be a whole number of minutes in `1..=MAX_TOKEN_TTL_MINUTES`.
fn parse_token_ttl(raw: Option<&str>) -> anyhow::Result<i64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TOKEN_TTL_MINUTES);
    };
    let minutes = raw
        .trim()
        .parse::<i64>()
        .with_context(|| format!("TOKEN_TTL_MINUTES is not a number: {raw}"))?;
    if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&minutes) {
        bail!("TOKEN_TTL_MINUTES must be between 1 and {MAX_TOKEN_TTL_MINUTES}, got {minutes}");
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_ttl_defaults_to_a_day() {
        assert_eq!(parse_token_ttl(None).unwrap(), 60 * 24);
        assert_eq!(parse_token_ttl(Some(" 90 ")).unwrap(), 90);
    }

    #[test]
    fn token_ttl_outside_range_fails_startup() {
        for raw in ["0", "-1", "abc", "9223372036854775807", "525601"] {
            assert!(parse_token_ttl(Some(raw)).is_err(), "{raw}");
        }
        assert_eq!(
            parse_token_ttl(Some("525600")).unwrap(),
            MAX_TOKEN_TTL_MINUTES
        );
    }
}
