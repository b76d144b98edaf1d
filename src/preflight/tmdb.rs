//! TMDB API preflight check.

use super::CheckResult;
use crate::models::config::TmdbConfig;
use crate::services::tmdb::TmdbClient;

/// Check if TMDB API is accessible with the configured key.
pub async fn check(config: &TmdbConfig) -> CheckResult {
    match TmdbClient::new(config.clone()) {
        Ok(client) => match client.verify_api_key().await {
            Ok(true) => CheckResult::ok("TMDB API", "connected"),
            Ok(false) => CheckResult::fail(
                "TMDB API",
                "invalid API key",
                "Check TMDB_API_KEY or [tmdb].api_key in config.toml",
            ),
            Err(_) => CheckResult::fail(
                "TMDB API",
                "connection failed",
                "Check your network connection and [tmdb].base_url",
            ),
        },
        Err(crate::Error::TmdbApiKeyMissing) => CheckResult::fail(
            "TMDB API",
            "API key not configured",
            "Set TMDB_API_KEY environment variable",
        ),
        Err(e) => CheckResult::fail("TMDB API", &e.to_string(), "Check config.toml"),
    }
}
