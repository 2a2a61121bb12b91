use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Create missing tables at startup
    pub sync_schema: bool,
    /// Rate limit user registration per peer IP
    pub rate_limit_enabled: bool,
    /// Seconds between token refills for each peer
    pub rate_limit_replenish_secs: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the config from a variable lookup. Unparseable values fall back to defaults.
    pub fn from_vars<F>(get: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: get("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_or(&get, "PORT", 8080),
            sync_schema: parse_or(&get, "SYNC_SCHEMA", true),
            rate_limit_enabled: parse_or(&get, "RATE_LIMIT_ENABLED", true),
            rate_limit_replenish_secs: parse_or(&get, "RATE_LIMIT_REPLENISH_SECS", 2),
            rate_limit_burst: parse_or(&get, "RATE_LIMIT_BURST", 5),
        })
    }
}

fn parse_or<F, T>(get: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    get(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}
