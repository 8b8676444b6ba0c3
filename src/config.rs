//! Runtime settings for the GitHub client.
//!
//! Lookup order for the API base URL: explicit value (CLI flag) >
//! `GITHUB_API_URL` environment variable > [`DEFAULT_API_URL`].

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// User agent sent with every request. GitHub rejects requests without one.
pub fn default_user_agent() -> String {
    format!("ghkit/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Defaults with the base URL taken from `GITHUB_API_URL` when set.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                cfg.api_base_url = url.to_string();
            }
        }
        cfg
    }

    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_base_url = url.to_string();
        self
    }
}
