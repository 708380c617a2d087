//! Translation capability: the system where translators work.

use std::collections::BTreeMap;

use crate::error::StoreError;

/// Per-locale completion statistics for a resource. Completion is the
/// platform's literal percentage string; a translation is only pulled when
/// it reads exactly `100%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceStats {
    pub completed: String,
}

impl ResourceStats {
    pub fn is_complete(&self) -> bool {
        self.completed == "100%"
    }
}

/// A resource as listed by the translation store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInfo {
    pub slug: String,
    pub name: String,
}

/// Hint for how the translation store should treat uploaded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Po,
    Html,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Po => "PO",
            ResourceKind::Html => "HTML",
        }
    }
}

/// Abstraction over a translation backend, bound to one project.
pub trait TranslationStore {
    /// Create the resource or overwrite its source content. Fails loudly on
    /// transport errors; push is all-or-nothing per resource.
    fn create_or_update_resource(
        &self,
        slug: &str,
        source_language: &str,
        title: &str,
        content: &str,
        kind: ResourceKind,
    ) -> Result<(), StoreError>;

    /// Completion statistics per locale for one resource.
    fn statistics(&self, slug: &str) -> Result<BTreeMap<String, ResourceStats>, StoreError>;

    /// Fetch the translated content of a resource for one locale.
    fn translation(&self, slug: &str, locale: &str) -> Result<String, StoreError>;

    /// List resources under the per-locale project. `StoreError::NotFound`
    /// when no project exists for that locale.
    fn list_resources(&self, locale: &str) -> Result<Vec<ResourceInfo>, StoreError>;

    fn resource_exists(&self, slug: &str, locale: &str) -> Result<bool, StoreError>;
}
