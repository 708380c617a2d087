use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Desk (content store)
    pub desk_sitename: String,
    pub desk_user: String,
    pub desk_password: String,

    // Transifex (translation store)
    pub transifex_api_url: String,
    pub transifex_user: String,
    pub transifex_password: String,

    // Project slugs, one per content kind
    pub topics_project_slug: String,
    pub tutorials_project_slug: String,

    // Language all source content is authored in
    pub source_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Desk - basic auth against the site API
            desk_sitename: std::env::var("DESK_SITENAME").context("DESK_SITENAME not set")?,
            desk_user: std::env::var("DESK_USER").context("DESK_USER not set")?,
            desk_password: std::env::var("DESK_PASSWD").context("DESK_PASSWD not set")?,

            // Transifex
            transifex_api_url: std::env::var("TRANSIFEX_API_URL")
                .unwrap_or_else(|_| "https://www.transifex.com".to_string()),
            transifex_user: std::env::var("TRANSIFEX_USER").context("TRANSIFEX_USER not set")?,
            transifex_password: std::env::var("TRANSIFEX_PASSWD")
                .context("TRANSIFEX_PASSWD not set")?,

            // Projects
            topics_project_slug: std::env::var("TOPICS_PROJECT_SLUG")
                .context("TOPICS_PROJECT_SLUG not set")?,
            tutorials_project_slug: std::env::var("TUTORIALS_PROJECT_SLUG")
                .context("TUTORIALS_PROJECT_SLUG not set")?,

            // Source language
            source_language: std::env::var("SOURCE_LANGUAGE")
                .unwrap_or_else(|_| "en_US".to_string()),
        })
    }

    /// First subtag of the source language, lowercased (`en_US` -> `en`).
    /// Locales under this prefix are handled by the English strategies only.
    pub fn source_prefix(&self) -> String {
        self.source_language
            .split(['_', '-'])
            .next()
            .unwrap_or(&self.source_language)
            .to_lowercase()
    }
}
