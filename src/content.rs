//! Content capability: the system of record for translatable content.
//!
//! Strategies only ever talk to [`ContentStore`]; the concrete Desk client
//! in [`crate::desk`] and the in-memory doubles used in tests both
//! implement it, so the sync core never knows which backend it is driving.

use std::collections::BTreeMap;

use crate::error::StoreError;

/// A help-center topic: a single translatable display string plus a
/// visibility flag that doubles as "is translatable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub description: String,
    pub show_in_portal: bool,
    /// Existing per-locale translation records, keyed by content-form locale.
    pub translations: BTreeMap<String, TopicTranslation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicTranslation {
    pub name: String,
}

/// A tutorial article: a structured document with subject and body.
/// An article is translatable when it has at least one translation record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub subject: String,
    pub body: String,
    pub translations: BTreeMap<String, ArticleTranslation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTranslation {
    pub subject: String,
    pub body: String,
    /// Set by the content store when the source article changed after this
    /// translation was last written.
    pub outdated: bool,
}

impl Article {
    pub fn is_translatable(&self) -> bool {
        !self.translations.is_empty()
    }
}

/// Named-field update set for a topic translation. `None` fields are left
/// untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicFields {
    pub name: String,
    pub description: Option<String>,
    pub show_in_portal: Option<bool>,
}

/// Named-field update set for an article translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFields {
    pub subject: Option<String>,
    pub body: String,
}

/// Abstraction over a content backend.
///
/// `update_*_translation` is create-or-update: a new per-locale record is
/// created when none exists, otherwise the existing one is updated, never
/// both. The `bool` is the backend's success flag for that
/// write; transport failures are errors instead.
pub trait ContentStore {
    fn topics(&self) -> Result<Vec<Topic>, StoreError>;

    fn articles(&self) -> Result<Vec<Article>, StoreError>;

    fn article_by_id(&self, id: &str) -> Result<Article, StoreError>;

    fn update_topic_translation(
        &self,
        topic_id: &str,
        locale: &str,
        fields: &TopicFields,
    ) -> Result<bool, StoreError>;

    fn update_article_translation(
        &self,
        article_id: &str,
        locale: &str,
        fields: &ArticleFields,
    ) -> Result<bool, StoreError>;

    /// Translation-platform tag -> this store's locale convention.
    fn content_locale(&self, tag: &str) -> String;

    /// This store's locale convention -> translation-platform tag.
    fn translation_locale(&self, tag: &str) -> String;
}
