//! In-memory capability doubles shared by the strategy unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use crate::content::{
    Article, ArticleFields, ContentStore, Topic, TopicFields, TopicTranslation,
};
use crate::error::StoreError;
use crate::locale::LocaleMap;
use crate::translation::{ResourceInfo, ResourceKind, ResourceStats, TranslationStore};

#[derive(Debug, Default)]
pub struct MemoryContent {
    pub topics: RefCell<Vec<Topic>>,
    pub articles: RefCell<Vec<Article>>,
    pub map: LocaleMap,
    pub topic_updates: RefCell<Vec<(String, String, TopicFields)>>,
    pub article_updates: RefCell<Vec<(String, String, ArticleFields)>>,
    /// When set, update calls report failure (backend said no).
    pub refuse_updates: Cell<bool>,
}

impl MemoryContent {
    pub fn with_topics(topics: Vec<Topic>) -> Self {
        Self {
            topics: RefCell::new(topics),
            ..Default::default()
        }
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: RefCell::new(articles),
            ..Default::default()
        }
    }
}

impl ContentStore for MemoryContent {
    fn topics(&self) -> Result<Vec<Topic>, StoreError> {
        Ok(self.topics.borrow().clone())
    }

    fn articles(&self) -> Result<Vec<Article>, StoreError> {
        Ok(self.articles.borrow().clone())
    }

    fn article_by_id(&self, id: &str) -> Result<Article, StoreError> {
        self.articles
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("article {id}")))
    }

    fn update_topic_translation(
        &self,
        topic_id: &str,
        locale: &str,
        fields: &TopicFields,
    ) -> Result<bool, StoreError> {
        self.topic_updates.borrow_mut().push((
            topic_id.to_string(),
            locale.to_string(),
            fields.clone(),
        ));
        if self.refuse_updates.get() {
            return Ok(false);
        }

        let mut topics = self.topics.borrow_mut();
        let topic = topics
            .iter_mut()
            .find(|t| t.id == topic_id)
            .ok_or_else(|| StoreError::NotFound(format!("topic {topic_id}")))?;
        topic
            .translations
            .entry(locale.to_string())
            .and_modify(|t| t.name = fields.name.clone())
            .or_insert_with(|| TopicTranslation {
                name: fields.name.clone(),
            });
        Ok(true)
    }

    fn update_article_translation(
        &self,
        article_id: &str,
        locale: &str,
        fields: &ArticleFields,
    ) -> Result<bool, StoreError> {
        self.article_updates.borrow_mut().push((
            article_id.to_string(),
            locale.to_string(),
            fields.clone(),
        ));
        Ok(!self.refuse_updates.get())
    }

    fn content_locale(&self, tag: &str) -> String {
        self.map.to_content_locale(tag)
    }

    fn translation_locale(&self, tag: &str) -> String {
        self.map.to_translation_locale(tag)
    }
}

#[derive(Debug, Clone)]
pub struct Upload {
    pub slug: String,
    pub source_language: String,
    pub title: String,
    pub content: String,
    pub kind: ResourceKind,
}

#[derive(Debug, Default)]
pub struct MemoryTranslation {
    /// slug -> locale -> stats
    pub stats: BTreeMap<String, BTreeMap<String, ResourceStats>>,
    /// (slug, locale) -> translated content
    pub translations: BTreeMap<(String, String), String>,
    /// locale -> listed resources; locales absent here raise NotFound
    pub listings: BTreeMap<String, Vec<ResourceInfo>>,
    /// (slug, locale) pairs for which resource_exists is true
    pub existing: BTreeSet<(String, String)>,
    pub uploads: RefCell<Vec<Upload>>,
    pub translation_fetches: RefCell<Vec<(String, String)>>,
    pub calls: Cell<usize>,
}

impl MemoryTranslation {
    pub fn stat(mut self, slug: &str, locale: &str, completed: &str) -> Self {
        self.stats
            .entry(slug.to_string())
            .or_default()
            .insert(
                locale.to_string(),
                ResourceStats {
                    completed: completed.to_string(),
                },
            );
        self
    }

    pub fn translated(mut self, slug: &str, locale: &str, content: &str) -> Self {
        self.translations
            .insert((slug.to_string(), locale.to_string()), content.to_string());
        self
    }

    pub fn listing(mut self, locale: &str, slugs: &[&str]) -> Self {
        self.listings.insert(
            locale.to_string(),
            slugs
                .iter()
                .map(|s| ResourceInfo {
                    slug: s.to_string(),
                    name: s.to_string(),
                })
                .collect(),
        );
        self
    }

    pub fn exists(mut self, slug: &str, locale: &str) -> Self {
        self.existing
            .insert((slug.to_string(), locale.to_string()));
        self
    }
}

impl TranslationStore for MemoryTranslation {
    fn create_or_update_resource(
        &self,
        slug: &str,
        source_language: &str,
        title: &str,
        content: &str,
        kind: ResourceKind,
    ) -> Result<(), StoreError> {
        self.calls.set(self.calls.get() + 1);
        self.uploads.borrow_mut().push(Upload {
            slug: slug.to_string(),
            source_language: source_language.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            kind,
        });
        Ok(())
    }

    fn statistics(&self, slug: &str) -> Result<BTreeMap<String, ResourceStats>, StoreError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.stats.get(slug).cloned().unwrap_or_default())
    }

    fn translation(&self, slug: &str, locale: &str) -> Result<String, StoreError> {
        self.calls.set(self.calls.get() + 1);
        self.translation_fetches
            .borrow_mut()
            .push((slug.to_string(), locale.to_string()));
        self.translations
            .get(&(slug.to_string(), locale.to_string()))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("translation {slug}/{locale}")))
    }

    fn list_resources(&self, locale: &str) -> Result<Vec<ResourceInfo>, StoreError> {
        self.calls.set(self.calls.get() + 1);
        self.listings
            .get(locale)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("project {locale}")))
    }

    fn resource_exists(&self, slug: &str, locale: &str) -> Result<bool, StoreError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self
            .existing
            .contains(&(slug.to_string(), locale.to_string())))
    }
}
