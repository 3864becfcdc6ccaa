//! Static locale catalog and locale-code resolution.
//!
//! The catalog is an ordered, immutable table of locale definitions; the
//! resolver normalizes a raw code string (`pt-BR`, `pt/BR`, `pt_br` are all
//! the same code) and matches it against the table. Single-segment codes
//! are short language or country codes resolved by first catalog match;
//! multi-segment codes must match a canonical key exactly.

mod catalog;

pub use catalog::CATALOG;

use std::fmt;

use tracing::debug;

use crate::error::TranslationError;

/// One entry in the static locale catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleDefinition {
    pub language_name: &'static str,
    pub country_name: &'static str,
    pub short_language_code: &'static str,
    pub short_country_code: &'static str,
    /// Canonical `_`-joined key, e.g. `pt_BR` or `ja_JP_JP`. Variant
    /// locales carry the variant inside the language code, so the key has
    /// three segments while the country code stays the third segment.
    pub key: &'static str,
}

impl LocaleDefinition {
    pub(crate) const fn new(
        language_name: &'static str,
        country_name: &'static str,
        short_language_code: &'static str,
        short_country_code: &'static str,
        key: &'static str,
    ) -> Self {
        Self {
            language_name,
            country_name,
            short_language_code,
            short_country_code,
            key,
        }
    }
}

/// A locale code successfully matched to a catalog definition.
///
/// Always traceable to exactly one [`LocaleDefinition`]; also remembers the
/// normalized input that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    definition: &'static LocaleDefinition,
    input: String,
}

impl Locale {
    pub fn definition(&self) -> &'static LocaleDefinition {
        self.definition
    }

    pub fn key(&self) -> &'static str {
        self.definition.key
    }

    pub fn language_name(&self) -> &'static str {
        self.definition.language_name
    }

    pub fn country_name(&self) -> &'static str {
        self.definition.country_name
    }

    pub fn short_language_code(&self) -> &'static str {
        self.definition.short_language_code
    }

    pub fn short_country_code(&self) -> &'static str {
        self.definition.short_country_code
    }

    /// The normalized code the resolver matched.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// BCP-47 rendition of this locale, used to drive the platform
    /// formatters. The legacy variant keys map onto their modern
    /// equivalents; everything else is the canonical key with `-`
    /// separators.
    pub fn bcp47(&self) -> String {
        match self.definition.key {
            "ja_JP_JP" => "ja-JP-u-ca-japanese".to_string(),
            "th_TH_TH" => "th-TH-u-nu-thai".to_string(),
            "no_NO_NY" => "nn-NO".to_string(),
            key => key.replace('_', "-"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition.key)
    }
}

/// Resolve a raw locale-code string against the catalog.
///
/// `-` and `/` delimiters are accepted interchangeably with `_`, and
/// matching ignores case. A code without segments is treated as a short
/// language or short country code and resolved to the first matching
/// definition in catalog order. Codes with more than three segments are
/// malformed.
pub fn resolve(code: &str) -> Result<Locale, TranslationError> {
    if code.trim().is_empty() {
        return Err(TranslationError::InvalidLocaleCode);
    }

    let normalized = code.replace(['-', '/'], "_");

    if !normalized.contains('_') {
        for definition in CATALOG {
            if definition.short_language_code.eq_ignore_ascii_case(&normalized)
                || definition.short_country_code.eq_ignore_ascii_case(&normalized)
            {
                debug!(code = %normalized, locale = definition.key, "resolved short locale code");
                return Ok(Locale {
                    definition,
                    input: normalized,
                });
            }
        }
        return Err(TranslationError::UnknownLocaleCode(normalized));
    }

    if normalized.split('_').count() > 3 {
        return Err(TranslationError::MalformedLocaleCode(normalized));
    }

    for definition in CATALOG {
        if definition.key.eq_ignore_ascii_case(&normalized) {
            debug!(code = %normalized, locale = definition.key, "resolved locale code");
            return Ok(Locale {
                definition,
                input: normalized,
            });
        }
    }

    Err(TranslationError::UnknownLocaleCode(normalized))
}

/// First definition whose language name matches, ignoring case.
pub fn find_by_language_name(name: &str) -> Option<&'static LocaleDefinition> {
    CATALOG
        .iter()
        .find(|definition| definition.language_name.eq_ignore_ascii_case(name))
}
