//! Tutorials sync: one document resource per article, per locale.

use anyhow::Result;
use tracing::{debug, error, info};

use crate::content::{Article, ArticleFields, ContentStore};
use crate::document::{make_resource_document, parse_resource_document};
use crate::error::StoreError;
use crate::locale::LocaleFilter;
use crate::sync::{SyncOptions, SyncStrategy};
use crate::translation::{ResourceKind, TranslationStore};

/// Resolve the articles a run operates on: everything, or just the
/// caller-supplied resource ids.
pub(crate) fn working_set(
    content: &dyn ContentStore,
    resources: &[String],
) -> Result<Vec<Article>, StoreError> {
    if resources.is_empty() {
        return content.articles();
    }
    resources
        .iter()
        .map(|id| content.article_by_id(id.trim()))
        .collect()
}

pub struct TutorialSync<'a> {
    content: &'a dyn ContentStore,
    translation: &'a dyn TranslationStore,
    filter: LocaleFilter,
    options: SyncOptions,
}

impl<'a> TutorialSync<'a> {
    pub fn new(
        content: &'a dyn ContentStore,
        translation: &'a dyn TranslationStore,
        filter: LocaleFilter,
        options: SyncOptions,
    ) -> Self {
        Self {
            content,
            translation,
            filter,
            options,
        }
    }

    fn make_resource_title(article: &Article) -> String {
        format!("{} ({})", article.subject, article.id)
    }

    fn is_complete(&self, lang: &str, slug: &str) -> Result<bool, StoreError> {
        let stats = self.translation.statistics(slug)?;
        Ok(stats.get(lang).is_some_and(|s| s.is_complete()))
    }
}

impl SyncStrategy for TutorialSync<'_> {
    fn name(&self) -> &'static str {
        "tutorials"
    }

    /// Upload every article translation record that needs it: forced,
    /// missing remotely, or marked out of date by the content store.
    fn push(&self) -> Result<()> {
        for article in working_set(self.content, &self.options.resources)? {
            debug!("Inspecting content resource {}", article.id);

            if !article.is_translatable() {
                debug!("No translation records; skipping.");
                continue;
            }

            for (locale, record) in &article.translations {
                debug!("Checking locale {}", locale);

                if !self.filter.should_process(locale) {
                    debug!("Skipping locale.");
                    continue;
                }

                let our_locale = self.content.translation_locale(locale);

                let needs_push = self.options.force
                    || !self.translation.resource_exists(&article.id, &our_locale)?
                    || record.outdated;
                if !needs_push {
                    continue;
                }

                info!(
                    "Resource {} out of date in {}; updating.",
                    article.id, our_locale
                );

                self.translation.create_or_update_resource(
                    &article.id,
                    &our_locale,
                    &Self::make_resource_title(&article),
                    &make_resource_document(&article.subject, &article.body),
                    ResourceKind::Html,
                )?;
            }
        }
        Ok(())
    }

    /// For each enabled locale, pull every fully-translated resource and
    /// write it back onto the matching article.
    fn pull(&self) -> Result<()> {
        for lang in self.filter.enabled().to_vec() {
            debug!("Pulling tutorials for {}", lang);

            if !self.filter.should_process(&lang) {
                debug!("Skipping locale {}", lang);
                continue;
            }

            let resources = match self.translation.list_resources(&lang) {
                Ok(resources) => resources,
                Err(err) if err.is_not_found() => {
                    error!("No project found for locale {}", lang);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            let resources: Vec<_> = if self.options.resources.is_empty() {
                resources
            } else {
                resources
                    .into_iter()
                    .filter(|r| self.options.resources.iter().any(|id| id.trim() == r.slug))
                    .collect()
            };

            for resource in resources {
                if !self.is_complete(&lang, &resource.slug)? {
                    continue;
                }

                info!("Pulling translation for {} in {}", resource.slug, lang);

                let document = self.translation.translation(&resource.slug, &lang)?;
                let parts = parse_resource_document(&document);

                let article = self.content.article_by_id(&resource.slug)?;
                self.content.update_article_translation(
                    &article.id,
                    &self.content.content_locale(&lang),
                    &ArticleFields {
                        subject: parts.subject,
                        body: parts.body,
                    },
                )?;
            }
        }
        Ok(())
    }
}
