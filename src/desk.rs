//! Desk content-store adapter.
//!
//! Thin blocking client for the Desk v2 API implementing the
//! [`ContentStore`] capability. Everything interesting about sync lives in
//! the strategies; this module only speaks HTTP and maps wire shapes onto
//! the core's data model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::content::{
    Article, ArticleFields, ArticleTranslation, ContentStore, Topic, TopicFields, TopicTranslation,
};
use crate::error::StoreError;
use crate::locale::LocaleMap;

pub struct DeskContent {
    client: reqwest::blocking::Client,
    base_url: String,
    user: String,
    password: String,
    map: LocaleMap,
}

// ==================== Wire types ====================

#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(rename = "_embedded")]
    embedded: Embedded<T>,
    #[serde(rename = "_links")]
    links: PageLinks,
}

#[derive(Debug, Deserialize)]
struct Embedded<T> {
    entries: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct PageLinks {
    next: Option<Link>,
}

#[derive(Debug, Deserialize)]
struct Link {
    href: String,
}

#[derive(Debug, Deserialize)]
struct SelfLinks {
    #[serde(rename = "self")]
    this: Link,
}

#[derive(Debug, Deserialize)]
struct TopicEntry {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    show_in_portal: bool,
    #[serde(rename = "_links")]
    links: SelfLinks,
}

#[derive(Debug, Deserialize)]
struct TopicTranslationEntry {
    locale: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ArticleEntry {
    subject: String,
    #[serde(default)]
    body: String,
    #[serde(rename = "_links")]
    links: SelfLinks,
}

#[derive(Debug, Deserialize)]
struct ArticleTranslationEntry {
    locale: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    outdated: bool,
}

#[derive(Debug, Serialize)]
struct TopicTranslationPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<&'a str>,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_in_portal: Option<bool>,
}

#[derive(Debug, Serialize)]
struct ArticleTranslationPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<&'a str>,
    body: &'a str,
}

/// Trailing path segment of a `_links.self` href; Desk ids are only
/// exposed that way.
fn id_from_href(href: &str) -> String {
    href.rsplit('/').next().unwrap_or(href).to_string()
}

impl DeskContent {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: format!("https://{}.desk.com", config.desk_sitename),
            user: config.desk_user.clone(),
            password: config.desk_password.clone(),
            map: LocaleMap::default(),
        }
    }

    fn get(&self, path: &str) -> Result<reqwest::blocking::Response, StoreError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .basic_auth(&self.user, Some(&self.password))
            .send()?;
        Self::check(response, path)
    }

    fn check(
        response: reqwest::blocking::Response,
        path: &str,
    ) -> Result<reqwest::blocking::Response, StoreError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(StoreError::Api {
                service: "desk",
                status,
                body,
            });
        }
        Ok(response)
    }

    /// Fetch all pages of a listing endpoint.
    fn get_all<T: serde::de::DeserializeOwned>(
        &self,
        first_path: &str,
    ) -> Result<Vec<T>, StoreError> {
        let mut entries = Vec::new();
        let mut path = first_path.to_string();

        loop {
            let page: Page<T> = self.get(&path)?.json()?;
            entries.extend(page.embedded.entries);

            match page.links.next {
                Some(link) => path = link.href,
                None => break,
            }
        }

        Ok(entries)
    }

    fn topic_translations(
        &self,
        topic_id: &str,
    ) -> Result<BTreeMap<String, TopicTranslation>, StoreError> {
        let entries: Vec<TopicTranslationEntry> =
            self.get_all(&format!("/api/v2/topics/{topic_id}/translations"))?;
        Ok(entries
            .into_iter()
            .map(|e| (e.locale, TopicTranslation { name: e.name }))
            .collect())
    }

    fn article_translations(
        &self,
        article_id: &str,
    ) -> Result<BTreeMap<String, ArticleTranslation>, StoreError> {
        let entries: Vec<ArticleTranslationEntry> =
            self.get_all(&format!("/api/v2/articles/{article_id}/translations"))?;
        Ok(entries
            .into_iter()
            .map(|e| {
                (
                    e.locale,
                    ArticleTranslation {
                        subject: e.subject,
                        body: e.body,
                        outdated: e.outdated,
                    },
                )
            })
            .collect())
    }

    fn article_from_entry(&self, entry: ArticleEntry) -> Result<Article, StoreError> {
        let id = id_from_href(&entry.links.this.href);
        let translations = self.article_translations(&id)?;
        Ok(Article {
            id,
            subject: entry.subject,
            body: entry.body,
            translations,
        })
    }

    /// Create-or-update a per-locale translation record: probe for the
    /// record, then POST (create) or PATCH (update), never both.
    fn write_translation<P: Serialize>(
        &self,
        collection_path: &str,
        locale: &str,
        create: &P,
        update: &P,
    ) -> Result<bool, StoreError> {
        let record_path = format!("{collection_path}/{locale}");
        let exists = match self.get(&record_path) {
            Ok(_) => true,
            Err(StoreError::NotFound(_)) => false,
            Err(err) => return Err(err),
        };

        let url = if exists {
            format!("{}{}", self.base_url, record_path)
        } else {
            format!("{}{}", self.base_url, collection_path)
        };
        debug!(
            "{} translation record {}",
            if exists { "Updating" } else { "Creating" },
            record_path
        );

        let request = if exists {
            self.client.patch(url).json(update)
        } else {
            self.client.post(url).json(create)
        };
        let response = request
            .basic_auth(&self.user, Some(&self.password))
            .send()?;

        let status = response.status();
        if status == reqwest::StatusCode::UNPROCESSABLE_ENTITY {
            // Backend refused the record; the strategies log and move on.
            return Ok(false);
        }
        Self::check(response, &record_path)?;
        Ok(true)
    }
}

impl ContentStore for DeskContent {
    fn topics(&self) -> Result<Vec<Topic>, StoreError> {
        let entries: Vec<TopicEntry> = self.get_all("/api/v2/topics")?;
        entries
            .into_iter()
            .map(|entry| {
                let id = id_from_href(&entry.links.this.href);
                let translations = self.topic_translations(&id)?;
                Ok(Topic {
                    id,
                    name: entry.name,
                    description: entry.description.unwrap_or_default(),
                    show_in_portal: entry.show_in_portal,
                    translations,
                })
            })
            .collect()
    }

    fn articles(&self) -> Result<Vec<Article>, StoreError> {
        let entries: Vec<ArticleEntry> = self.get_all("/api/v2/articles")?;
        entries
            .into_iter()
            .map(|entry| self.article_from_entry(entry))
            .collect()
    }

    fn article_by_id(&self, id: &str) -> Result<Article, StoreError> {
        let entry: ArticleEntry = self.get(&format!("/api/v2/articles/{id}"))?.json()?;
        self.article_from_entry(entry)
    }

    fn update_topic_translation(
        &self,
        topic_id: &str,
        locale: &str,
        fields: &TopicFields,
    ) -> Result<bool, StoreError> {
        let create = TopicTranslationPayload {
            locale: Some(locale),
            name: &fields.name,
            description: fields.description.as_deref(),
            show_in_portal: fields.show_in_portal,
        };
        let update = TopicTranslationPayload {
            locale: None,
            ..create
        };
        self.write_translation(
            &format!("/api/v2/topics/{topic_id}/translations"),
            locale,
            &create,
            &update,
        )
    }

    fn update_article_translation(
        &self,
        article_id: &str,
        locale: &str,
        fields: &ArticleFields,
    ) -> Result<bool, StoreError> {
        let create = ArticleTranslationPayload {
            locale: Some(locale),
            subject: fields.subject.as_deref(),
            body: &fields.body,
        };
        let update = ArticleTranslationPayload {
            locale: None,
            ..create
        };
        self.write_translation(
            &format!("/api/v2/articles/{article_id}/translations"),
            locale,
            &create,
            &update,
        )
    }

    fn content_locale(&self, tag: &str) -> String {
        self.map.to_content_locale(tag)
    }

    fn translation_locale(&self, tag: &str) -> String {
        self.map.to_translation_locale(tag)
    }
}
