//! Message catalogs: per-locale template bundles and placeholder expansion.
//!
//! A bundle maps opaque keys to template strings for one locale. The
//! catalog groups bundles by canonical locale key, is built once at
//! startup, and is shared read-only by every in-flight pipeline
//! invocation.

pub mod loader;

use std::collections::HashMap;

// ============================================================
// Bundle Types
// ============================================================

/// All message templates for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleBundle {
    /// Canonical locale key (e.g. "pt_BR").
    pub locale: String,
    /// File the bundle was loaded from, if any.
    pub file_path: Option<String>,
    entries: HashMap<String, String>,
}

impl LocaleBundle {
    /// Create an empty bundle for a locale.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            file_path: None,
            entries: HashMap::new(),
        }
    }

    /// Insert a template under a key, replacing any previous template.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    /// Get a template by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check if a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get all keys as an iterator.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable registry of locale bundles, keyed by canonical locale key.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    bundles: HashMap<String, LocaleBundle>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a bundle under its locale key, replacing any previous bundle
    /// for that locale.
    pub fn insert(&mut self, bundle: LocaleBundle) {
        self.bundles.insert(bundle.locale.clone(), bundle);
    }

    /// The bundle for a canonical locale key.
    pub fn bundle(&self, locale_key: &str) -> Option<&LocaleBundle> {
        self.bundles.get(locale_key)
    }

    /// Locale keys with a loaded bundle.
    pub fn locales(&self) -> impl Iterator<Item = &String> {
        self.bundles.keys()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

// ============================================================
// Placeholder Expansion
// ============================================================

/// Substitute positional `{0}`-style placeholders with `args`.
///
/// Placeholders are substituted in template order; an index without a
/// matching argument, and any brace pair that is not a bare index, is left
/// verbatim.
pub fn expand_placeholders(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let (head, tail) = rest.split_at(start);
        out.push_str(head);

        let Some(end) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };

        let token = &tail[1..end];
        let index = if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            token.parse::<usize>().ok()
        } else {
            None
        };

        match index.and_then(|i| args.get(i)) {
            Some(arg) => out.push_str(arg),
            None => out.push_str(&tail[..=end]),
        }

        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}
