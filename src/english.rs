//! English copy strategies.
//!
//! English-family locales never round-trip through the translation store:
//! source content is authored in English, so the English strategies copy it
//! verbatim onto the requested English-region variants within the content
//! store. Pushing English content out for translation is refused.

use anyhow::Result;
use tracing::{debug, error, info};

use crate::content::{ArticleFields, ContentStore, TopicFields};
use crate::locale::LocaleFilter;
use crate::sync::{SyncOptions, SyncStrategy};
use crate::tutorials::working_set;

pub struct EnglishTopicSync<'a> {
    content: &'a dyn ContentStore,
    filter: LocaleFilter,
}

impl<'a> EnglishTopicSync<'a> {
    pub fn new(content: &'a dyn ContentStore, filter: LocaleFilter) -> Self {
        Self { content, filter }
    }
}

impl SyncStrategy for EnglishTopicSync<'_> {
    fn name(&self) -> &'static str {
        "english_topics"
    }

    fn push(&self) -> Result<()> {
        info!("Refusing to push topics for English locales.");
        Ok(())
    }

    fn pull(&self) -> Result<()> {
        for topic in self.content.topics()? {
            if !topic.show_in_portal {
                continue;
            }

            for locale in self.filter.enabled() {
                if !self.filter.should_copy_source(locale) {
                    continue;
                }

                info!(
                    "Preparing to copy topic {} ({}) for {}",
                    topic.name, topic.id, locale
                );

                let fields = TopicFields {
                    name: topic.name.clone(),
                    description: Some(topic.description.clone()),
                    show_in_portal: Some(true),
                };

                let success = self
                    .content
                    .update_topic_translation(&topic.id, locale, &fields)?;
                if !success {
                    error!("Error updating topic {} ({})", topic.name, topic.id);
                }
            }
        }
        Ok(())
    }
}

pub struct EnglishTutorialSync<'a> {
    content: &'a dyn ContentStore,
    filter: LocaleFilter,
    options: SyncOptions,
}

impl<'a> EnglishTutorialSync<'a> {
    pub fn new(content: &'a dyn ContentStore, filter: LocaleFilter, options: SyncOptions) -> Self {
        Self {
            content,
            filter,
            options,
        }
    }
}

impl SyncStrategy for EnglishTutorialSync<'_> {
    fn name(&self) -> &'static str {
        "english_tutorials"
    }

    fn push(&self) -> Result<()> {
        info!("Refusing to push tutorials for English locales.");
        Ok(())
    }

    fn pull(&self) -> Result<()> {
        for article in working_set(self.content, &self.options.resources)? {
            for (locale, record) in &article.translations {
                if !self.filter.should_copy_source(locale) {
                    debug!("Skipping locale {}.", locale);
                    continue;
                }

                if !(self.options.force || record.outdated) {
                    continue;
                }

                info!("Preparing to copy article {} for {}", article.id, locale);

                let fields = ArticleFields {
                    subject: Some(article.subject.clone()),
                    body: article.body.clone(),
                };

                let success = self
                    .content
                    .update_article_translation(&article.id, locale, &fields)?;
                if !success {
                    error!("Error updating {} (content ID {}).", locale, article.id);
                }
            }
        }
        Ok(())
    }
}
