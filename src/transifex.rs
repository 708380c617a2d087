//! Transifex translation-store adapter.
//!
//! Thin blocking client for the Transifex v2 API implementing the
//! [`TranslationStore`] capability, bound to one project. Locale-scoped
//! operations (`list_resources`, `resource_exists`, and writes of
//! locale-bound document resources) address the per-locale project
//! `<base>-<locale>` the translators work in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::StoreError;
use crate::translation::{ResourceInfo, ResourceKind, ResourceStats, TranslationStore};

pub struct Tx {
    client: reqwest::blocking::Client,
    api_url: String,
    user: String,
    password: String,
    project_slug: String,
}

// ==================== Wire types ====================

#[derive(Debug, Deserialize)]
struct StatsEntry {
    completed: String,
}

#[derive(Debug, Deserialize)]
struct TranslationContent {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ResourceEntry {
    slug: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct CreateResourcePayload<'a> {
    slug: &'a str,
    name: &'a str,
    i18n_type: &'a str,
    source_language_code: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateContentPayload<'a> {
    content: &'a str,
}

impl Tx {
    pub fn new(config: &Config, project_slug: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_url: config.transifex_api_url.clone(),
            user: config.transifex_user.clone(),
            password: config.transifex_password.clone(),
            project_slug: project_slug.to_string(),
        }
    }

    fn project_for(&self, locale: &str) -> String {
        format!("{}-{}", self.project_slug, locale.to_lowercase())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/2{}", self.api_url, path)
    }

    fn check(
        response: reqwest::blocking::Response,
        what: &str,
    ) -> Result<reqwest::blocking::Response, StoreError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(what.to_string()));
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(StoreError::Api {
                service: "transifex",
                status,
                body,
            });
        }
        Ok(response)
    }

    fn get(&self, path: &str, what: &str) -> Result<reqwest::blocking::Response, StoreError> {
        let response = self
            .client
            .get(self.url(path))
            .basic_auth(&self.user, Some(&self.password))
            .send()?;
        Self::check(response, what)
    }
}

impl TranslationStore for Tx {
    fn create_or_update_resource(
        &self,
        slug: &str,
        source_language: &str,
        title: &str,
        content: &str,
        kind: ResourceKind,
    ) -> Result<(), StoreError> {
        // Topic catalogs live in the base project. Document resources are
        // locale-bound and live in the same per-locale project that
        // `list_resources` and `resource_exists` address.
        let project = match kind {
            ResourceKind::Po => self.project_slug.clone(),
            ResourceKind::Html => self.project_for(source_language),
        };

        let resource_path = format!("/project/{}/resource/{}/", project, slug);
        let exists = match self.get(&resource_path, slug) {
            Ok(_) => true,
            Err(StoreError::NotFound(_)) => false,
            Err(err) => return Err(err),
        };

        let response = if exists {
            debug!("Updating existing resource {}", slug);
            self.client
                .put(self.url(&format!("/project/{}/resource/{}/content/", project, slug)))
                .json(&UpdateContentPayload { content })
                .basic_auth(&self.user, Some(&self.password))
                .send()?
        } else {
            debug!("Creating resource {}", slug);
            self.client
                .post(self.url(&format!("/project/{}/resources/", project)))
                .json(&CreateResourcePayload {
                    slug,
                    name: title,
                    i18n_type: kind.as_str(),
                    source_language_code: source_language,
                    content,
                })
                .basic_auth(&self.user, Some(&self.password))
                .send()?
        };

        Self::check(response, slug)?;
        Ok(())
    }

    fn statistics(&self, slug: &str) -> Result<BTreeMap<String, ResourceStats>, StoreError> {
        let entries: BTreeMap<String, StatsEntry> = self
            .get(
                &format!("/project/{}/resource/{}/stats/", self.project_slug, slug),
                slug,
            )?
            .json()?;
        Ok(entries
            .into_iter()
            .map(|(locale, entry)| {
                (
                    locale,
                    ResourceStats {
                        completed: entry.completed,
                    },
                )
            })
            .collect())
    }

    fn translation(&self, slug: &str, locale: &str) -> Result<String, StoreError> {
        let body: TranslationContent = self
            .get(
                &format!(
                    "/project/{}/resource/{}/translation/{}/",
                    self.project_slug, slug, locale
                ),
                slug,
            )?
            .json()?;
        Ok(body.content)
    }

    fn list_resources(&self, locale: &str) -> Result<Vec<ResourceInfo>, StoreError> {
        let project = self.project_for(locale);
        let entries: Vec<ResourceEntry> = self
            .get(
                &format!("/project/{}/resources/", project),
                &format!("project {project}"),
            )?
            .json()?;
        Ok(entries
            .into_iter()
            .map(|e| ResourceInfo {
                slug: e.slug,
                name: e.name,
            })
            .collect())
    }

    fn resource_exists(&self, slug: &str, locale: &str) -> Result<bool, StoreError> {
        let project = self.project_for(locale);
        match self.get(&format!("/project/{}/resource/{}/", project, slug), slug) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
