//! Locale mapping and filtering rules.
//!
//! Locale tags show up in two conventions: the translation platform uses
//! `xx-YY`/`xx_yy` (hyphen or underscore, any case), the content platform
//! uses `xx_YY` (underscore, region uppercased). [`LocaleMap`] converts
//! between the two; [`LocaleFilter`] decides which candidate locales a sync
//! run should touch, accepting tags in either convention without requiring
//! callers to pre-normalize.

use std::collections::BTreeMap;

/// Bidirectional locale-tag mapping with a fixed override table.
///
/// The default table collapses the source-language region variant to a bare
/// language code (`en_us` -> `en`). The reverse direction is built by
/// inverting the table.
///
/// The two directions are intentionally NOT inverses for tags outside the
/// table: `to_content_locale` canonicalizes to lowercase/underscore while
/// `to_translation_locale` re-cases region subtags. Downstream backends
/// depend on each side's casing convention, so this stays asymmetric.
#[derive(Debug, Clone)]
pub struct LocaleMap {
    forward: BTreeMap<String, String>,
    reverse: BTreeMap<String, String>,
}

impl Default for LocaleMap {
    fn default() -> Self {
        Self::new(&[("en_us", "en")])
    }
}

impl LocaleMap {
    pub fn new(overrides: &[(&str, &str)]) -> Self {
        let forward: BTreeMap<String, String> = overrides
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let reverse = forward.iter().map(|(k, v)| (v.clone(), k.clone())).collect();
        Self { forward, reverse }
    }

    /// Content-form values of the override table (e.g. `en` for the default
    /// table).
    pub fn content_overrides(&self) -> impl Iterator<Item = &str> {
        self.forward.values().map(String::as_str)
    }

    /// Canonicalize a tag (lowercase, `-` -> `_`) and apply the override
    /// table. Unmapped tags pass through in canonical form.
    pub fn to_content_locale(&self, tag: &str) -> String {
        let canonical = tag.to_lowercase().replace('-', "_");
        self.forward
            .get(&canonical)
            .cloned()
            .unwrap_or(canonical)
    }

    /// Map a content-form tag back to the translation platform's convention:
    /// exact lookup in the inverted table, then re-case so every subtag
    /// after the first is uppercased (`pt_br` -> `pt_BR`).
    pub fn to_translation_locale(&self, tag: &str) -> String {
        let mapped = self
            .reverse
            .get(tag)
            .map(String::as_str)
            .unwrap_or(tag);

        let mut pieces = mapped.split('_');
        let mut result = pieces.next().unwrap_or_default().to_string();
        for piece in pieces {
            result.push('_');
            result.push_str(&piece.to_uppercase());
        }
        result
    }
}

/// Decides whether a candidate locale participates in a sync run.
#[derive(Debug, Clone)]
pub struct LocaleFilter {
    map: LocaleMap,
    enabled: Vec<String>,
    lower_enabled: Vec<String>,
    source_prefix: String,
}

impl LocaleFilter {
    pub fn new(map: LocaleMap, enabled: &[String], source_prefix: &str) -> Self {
        let lower_enabled = enabled.iter().map(|l| l.to_lowercase()).collect();
        Self {
            map,
            enabled: enabled.to_vec(),
            lower_enabled,
            source_prefix: source_prefix.to_lowercase(),
        }
    }

    pub fn map(&self) -> &LocaleMap {
        &self.map
    }

    pub fn enabled(&self) -> &[String] {
        &self.enabled
    }

    /// True when `candidate` should be processed by a generic sync strategy.
    ///
    /// Source-language locales are always excluded here (they have their own
    /// copy strategies). Everything else matches if the candidate, in either
    /// tag convention and any case, is in the enabled set.
    pub fn should_process(&self, candidate: &str) -> bool {
        let lower = candidate.to_lowercase();
        if lower.starts_with(&self.source_prefix) {
            return false;
        }

        let mapped = self.map.to_content_locale(candidate);

        self.enabled.iter().any(|l| l == candidate)
            || self.enabled.iter().any(|l| *l == mapped)
            || self.lower_enabled.contains(&lower)
            || self.lower_enabled.contains(&mapped.to_lowercase())
    }

    /// Inverse selection used by the English copy strategies: only locales
    /// under the source prefix, and only when explicitly enabled.
    pub fn should_copy_source(&self, candidate: &str) -> bool {
        let lower = candidate.to_lowercase();
        lower.starts_with(&self.source_prefix) && self.lower_enabled.contains(&lower)
    }
}
