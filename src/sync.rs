//! Sync requests and the strategy seam.
//!
//! The CLI layer builds one immutable [`SyncRequest`] and hands it to
//! [`run`]; everything after that is typed. Each content kind has one
//! [`SyncStrategy`] implementation driving its push/pull protocol.

use anyhow::Result;

use crate::config::Config;
use crate::content::ContentStore;
use crate::english::{EnglishTopicSync, EnglishTutorialSync};
use crate::locale::{LocaleFilter, LocaleMap};
use crate::topics::TopicSync;
use crate::translation::TranslationStore;
use crate::tutorials::TutorialSync;

/// What kind of content a strategy operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Topics,
    Tutorials,
    EnglishTopics,
    EnglishTutorials,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Topics,
        ContentKind::Tutorials,
        ContentKind::EnglishTopics,
        ContentKind::EnglishTutorials,
    ];

    /// The translation-store project this kind syncs against, if any.
    /// English strategies copy within the content store and have none.
    pub fn project_slug<'a>(&self, config: &'a Config) -> Option<&'a str> {
        match self {
            ContentKind::Topics => Some(&config.topics_project_slug),
            ContentKind::Tutorials => Some(&config.tutorials_project_slug),
            ContentKind::EnglishTopics | ContentKind::EnglishTutorials => None,
        }
    }
}

/// Which way content flows. `--push` and `--pull` are independently
/// settable on the command line; both yields `Both` (push runs first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Push,
    Pull,
    Both,
}

impl Direction {
    pub fn from_flags(push: bool, pull: bool) -> Option<Direction> {
        match (push, pull) {
            (true, true) => Some(Direction::Both),
            (true, false) => Some(Direction::Push),
            (false, true) => Some(Direction::Pull),
            (false, false) => None,
        }
    }

    pub fn includes_push(&self) -> bool {
        matches!(self, Direction::Push | Direction::Both)
    }

    pub fn includes_pull(&self) -> bool {
        matches!(self, Direction::Pull | Direction::Both)
    }
}

/// One unit of sync work, built once by the adapter layer.
#[derive(Debug, Clone)]
pub struct SyncRequest {
    pub kinds: Vec<ContentKind>,
    pub direction: Direction,
    pub locales: Vec<String>,
    /// Content resource ids to restrict to (tutorials only).
    pub resources: Vec<String>,
    /// Push even when the out-of-date check says the remote is current.
    pub force: bool,
}

/// Options owned by a single strategy instance.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    pub resources: Vec<String>,
    pub force: bool,
}

impl SyncOptions {
    pub fn from_request(request: &SyncRequest) -> Self {
        Self {
            resources: request.resources.clone(),
            force: request.force,
        }
    }
}

/// Drives the push/pull protocol for one content kind.
pub trait SyncStrategy {
    fn name(&self) -> &'static str;

    /// Push source content out for translation.
    fn push(&self) -> Result<()>;

    /// Pull completed translations back into the content store.
    fn pull(&self) -> Result<()>;
}

/// Build the strategy for one kind. `translation` must be bound to the
/// kind's project slug; English kinds ignore it.
pub fn make_strategy<'a>(
    kind: ContentKind,
    config: &Config,
    content: &'a dyn ContentStore,
    translation: &'a dyn TranslationStore,
    request: &SyncRequest,
) -> Box<dyn SyncStrategy + 'a> {
    let filter = LocaleFilter::new(
        LocaleMap::default(),
        &request.locales,
        &config.source_prefix(),
    );
    let options = SyncOptions::from_request(request);

    match kind {
        ContentKind::Topics => Box::new(TopicSync::new(
            content,
            translation,
            filter,
            config.source_language.clone(),
        )),
        ContentKind::Tutorials => Box::new(TutorialSync::new(
            content,
            translation,
            filter,
            options,
        )),
        ContentKind::EnglishTopics => Box::new(EnglishTopicSync::new(content, filter)),
        ContentKind::EnglishTutorials => {
            Box::new(EnglishTutorialSync::new(content, filter, options))
        }
    }
}

/// Execute a request against already-constructed backends.
///
/// `make_translation` is called once per kind so each strategy gets a
/// translation store bound to its own project slug.
pub fn run<'a>(
    request: &SyncRequest,
    config: &Config,
    content: &dyn ContentStore,
    make_translation: &dyn Fn(&str) -> Result<Box<dyn TranslationStore + 'a>>,
) -> Result<()> {
    for kind in &request.kinds {
        // English kinds never consult the translation store; bind the
        // topics project as a placeholder so the signature stays uniform.
        let slug = kind
            .project_slug(config)
            .unwrap_or(&config.topics_project_slug);
        let translation = make_translation(slug)?;
        let strategy = make_strategy(*kind, config, content, translation.as_ref(), request);

        if request.direction.includes_push() {
            tracing::info!("Running {} push", strategy.name());
            strategy.push()?;
        }
        if request.direction.includes_pull() {
            tracing::info!("Running {} pull", strategy.name());
            strategy.pull()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_flags() {
        assert_eq!(Direction::from_flags(true, false), Some(Direction::Push));
        assert_eq!(Direction::from_flags(false, true), Some(Direction::Pull));
        assert_eq!(Direction::from_flags(true, true), Some(Direction::Both));
        assert_eq!(Direction::from_flags(false, false), None);
    }

    #[test]
    fn test_direction_includes() {
        assert!(Direction::Both.includes_push());
        assert!(Direction::Both.includes_pull());
        assert!(Direction::Push.includes_push());
        assert!(!Direction::Push.includes_pull());
        assert!(!Direction::Pull.includes_push());
    }

    #[test]
    fn test_all_kinds_listed_once() {
        assert_eq!(ContentKind::ALL.len(), 4);
        assert!(ContentKind::ALL.contains(&ContentKind::EnglishTutorials));
    }
}
