//! Topics sync: a single string catalog shuttled as one PO resource.

use anyhow::{Context, Result};
use tracing::{debug, error};

use crate::catalog::Catalog;
use crate::content::{ContentStore, TopicFields};
use crate::locale::LocaleFilter;
use crate::sync::SyncStrategy;
use crate::translation::{ResourceKind, TranslationStore};

/// Fixed slug of the one catalog resource holding every topic string.
pub const TOPIC_STRINGS_SLUG: &str = "desk-topics";

const TOPIC_STRINGS_TITLE: &str = "Help Center Topics";

pub struct TopicSync<'a> {
    content: &'a dyn ContentStore,
    translation: &'a dyn TranslationStore,
    filter: LocaleFilter,
    source_language: String,
}

impl<'a> TopicSync<'a> {
    pub fn new(
        content: &'a dyn ContentStore,
        translation: &'a dyn TranslationStore,
        filter: LocaleFilter,
        source_language: String,
    ) -> Self {
        Self {
            content,
            translation,
            filter,
            source_language,
        }
    }
}

impl SyncStrategy for TopicSync<'_> {
    fn name(&self) -> &'static str {
        "topics"
    }

    /// Assemble one catalog of all portal-visible topic names and upload it
    /// as the topics resource. All-or-nothing: any backend error aborts the
    /// whole push.
    fn push(&self) -> Result<()> {
        let mut template = Catalog::new();
        for topic in self.content.topics()? {
            if topic.show_in_portal {
                template.add(&topic.name);
            }
        }

        self.translation.create_or_update_resource(
            TOPIC_STRINGS_SLUG,
            &self.source_language,
            TOPIC_STRINGS_TITLE,
            &template.to_po(),
            ResourceKind::Po,
        )?;
        Ok(())
    }

    /// Fetch every fully-translated locale catalog, then write the
    /// translated names back onto the topics.
    fn pull(&self) -> Result<()> {
        let stats = self.translation.statistics(TOPIC_STRINGS_SLUG)?;

        let mut translated: Vec<(String, Catalog)> = Vec::new();
        for locale in self.filter.enabled() {
            if !self.filter.should_process(locale) {
                continue;
            }

            let Some(locale_stats) = stats.get(locale) else {
                debug!("Locale {} not present when pulling topics.", locale);
                continue;
            };

            if !locale_stats.is_complete() {
                continue;
            }

            let po = self.translation.translation(TOPIC_STRINGS_SLUG, locale)?;
            let catalog = Catalog::from_po(&po)
                .with_context(|| format!("malformed catalog for locale {locale}"))?;
            translated.push((locale.clone(), catalog));
        }

        for topic in self.content.topics()? {
            for (locale, catalog) in &translated {
                match catalog.translation(&topic.name) {
                    Some(name) => {
                        debug!("Updating topic ({}) for locale ({})", topic.name, locale);
                        self.content.update_topic_translation(
                            &topic.id,
                            locale,
                            &TopicFields {
                                name: name.to_string(),
                                ..Default::default()
                            },
                        )?;
                    }
                    None => {
                        error!(
                            "Topic name ({}) does not exist in locale ({})",
                            topic.name, locale
                        );
                    }
                }
            }
        }

        Ok(())
    }
}
