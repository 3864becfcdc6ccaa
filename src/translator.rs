//! Locale-bound formatting and catalog-backed text translation.
//!
//! A [`Translator`] binds one resolved locale for the duration of a
//! pipeline invocation. Formatting delegates to the platform's
//! locale-aware formatters; text translation looks keys up in the bound
//! locale's bundle, falling back to the key itself when the catalog
//! doesn't carry it.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use icu::calendar::Date;
use icu::datetime::{DateTimeFormatter, NoCalendarFormatter, fieldsets};
use icu::decimal::DecimalFormatter;
use icu::decimal::input::Decimal;
use icu::locale::Locale as IcuLocale;
use icu::time::Time;

use crate::error::{OperationFailure, TranslationError};
use crate::locales::Locale;
use crate::messages::{MessageCatalog, expand_placeholders};

/// Rendering length for date and time formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatStyle {
    /// e.g. "1/1/16"
    Short,
    /// e.g. "Jan 1, 2016"
    #[default]
    Medium,
    /// e.g. "January 1, 2016"
    Long,
    /// e.g. "Friday, January 1, 2016"
    Full,
}

/// Translates and formats values for one resolved locale.
///
/// Built per pipeline invocation and discarded afterwards; holds no state
/// beyond the bound locale and a shared read-only message catalog.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: Locale,
    messages: Arc<MessageCatalog>,
}

impl Translator {
    pub fn new(locale: Locale, messages: Arc<MessageCatalog>) -> Self {
        Self { locale, messages }
    }

    /// The locale this translator is bound to.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    fn icu_locale(&self) -> IcuLocale {
        self.locale.bcp47().parse().unwrap_or(IcuLocale::UNKNOWN)
    }

    // ============================================================
    // Date & Time Formatting
    // ============================================================

    /// Format a calendar date for the bound locale.
    ///
    /// Falls back to the ISO rendering if the locale's calendar data can't
    /// be materialized.
    pub fn format_date(&self, date: NaiveDate, style: FormatStyle) -> String {
        let iso = match Date::try_new_iso(date.year(), date.month() as u8, date.day() as u8) {
            Ok(iso) => iso,
            Err(_) => return date.format("%Y-%m-%d").to_string(),
        };

        let locale = self.icu_locale();
        let formatted = match style {
            FormatStyle::Short => DateTimeFormatter::try_new(locale.into(), fieldsets::YMD::short())
                .ok()
                .map(|formatter| formatter.format(&iso).to_string()),
            FormatStyle::Medium => {
                DateTimeFormatter::try_new(locale.into(), fieldsets::YMD::medium())
                    .ok()
                    .map(|formatter| formatter.format(&iso).to_string())
            }
            FormatStyle::Long => DateTimeFormatter::try_new(locale.into(), fieldsets::YMD::long())
                .ok()
                .map(|formatter| formatter.format(&iso).to_string()),
            FormatStyle::Full => DateTimeFormatter::try_new(locale.into(), fieldsets::YMDE::long())
                .ok()
                .map(|formatter| formatter.format(&iso).to_string()),
        };

        formatted.unwrap_or_else(|| date.format("%Y-%m-%d").to_string())
    }

    /// Format a wall-clock time for the bound locale.
    pub fn format_time(&self, time: NaiveTime, style: FormatStyle) -> String {
        let clock = match Time::try_new(
            time.hour() as u8,
            time.minute() as u8,
            time.second() as u8,
            0,
        ) {
            Ok(clock) => clock,
            Err(_) => return time.format("%H:%M:%S").to_string(),
        };

        let locale = self.icu_locale();
        let formatted = match style {
            FormatStyle::Short => NoCalendarFormatter::try_new(locale.into(), fieldsets::T::short())
                .ok()
                .map(|formatter| formatter.format(&clock).to_string()),
            FormatStyle::Medium => {
                NoCalendarFormatter::try_new(locale.into(), fieldsets::T::medium())
                    .ok()
                    .map(|formatter| formatter.format(&clock).to_string())
            }
            // The platform formatter caps time styles at "long".
            FormatStyle::Long | FormatStyle::Full => {
                NoCalendarFormatter::try_new(locale.into(), fieldsets::T::long())
                    .ok()
                    .map(|formatter| formatter.format(&clock).to_string())
            }
        };

        formatted.unwrap_or_else(|| time.format("%H:%M:%S").to_string())
    }

    // ============================================================
    // Number Formatting
    // ============================================================

    /// Format a number with the locale's separators.
    ///
    /// Up to three fraction digits are kept, trailing zeros trimmed.
    pub fn format_number(&self, value: f64) -> String {
        match DecimalFormatter::try_new(self.icu_locale().into(), Default::default()) {
            Ok(formatter) => formatter.format(&Self::decimal(value)).to_string(),
            Err(_) => value.to_string(),
        }
    }

    /// Format a ratio as a percentage: `0.1` renders as `10%`.
    pub fn format_percent(&self, value: f64) -> String {
        format!("{}%", self.format_number(value * 100.0))
    }

    /// Format an amount prefixed with the currency symbol of the locale's
    /// country.
    pub fn format_currency(&self, value: f64) -> String {
        format!("{} {}", self.currency_symbol(), self.format_number(value))
    }

    fn decimal(value: f64) -> Decimal {
        let mut scaled = (value * 1000.0).round() as i64;
        let mut places: i16 = 3;
        while places > 0 && scaled % 10 == 0 {
            scaled /= 10;
            places -= 1;
        }
        let mut decimal = Decimal::from(scaled);
        decimal.multiply_pow10(-places);
        decimal
    }

    /// Currency symbol for the bound locale's country, falling back to the
    /// generic currency sign.
    pub fn currency_symbol(&self) -> &'static str {
        match self.locale.short_country_code() {
            "US" | "EC" | "SV" | "PR" => "$",
            "BR" => "R$",
            "GB" => "£",
            "JP" => "¥",
            "CN" | "HK" | "TW" | "SG" => "¥",
            "KR" => "₩",
            "IN" => "₹",
            "RU" => "₽",
            "CA" => "CA$",
            "AU" => "A$",
            "NZ" => "NZ$",
            "MX" => "MX$",
            "CH" => "CHF",
            "TR" => "₺",
            "TH" => "฿",
            "VN" => "₫",
            "UA" => "₴",
            "AT" | "BE" | "CY" | "DE" | "EE" | "ES" | "FI" | "FR" | "GR" | "IE" | "IT" | "LT"
            | "LU" | "LV" | "MT" | "NL" | "PT" | "SI" | "SK" => "€",
            _ => "¤",
        }
    }

    // ============================================================
    // Text Translation
    // ============================================================

    /// Look up `key` in the bound locale's bundle.
    ///
    /// Unknown keys come back unchanged: translation never hard-fails on a
    /// key the catalog doesn't carry.
    pub fn translate_text(&self, key: &str) -> Result<String, TranslationError> {
        self.translate_text_with_args(key, &[])
    }

    /// Look up `key` and substitute positional `{0}` placeholders with
    /// `args`.
    pub fn translate_text_with_args(
        &self,
        key: &str,
        args: &[&str],
    ) -> Result<String, TranslationError> {
        if key.trim().is_empty() {
            return Err(TranslationError::InvalidArgument(
                "the text to translate can't be empty or blank".to_string(),
            ));
        }

        let Some(template) = self.lookup(key) else {
            return Ok(key.to_string());
        };

        if args.is_empty() {
            Ok(template.to_string())
        } else {
            Ok(expand_placeholders(template, args))
        }
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.messages
            .bundle(self.locale.key())
            .and_then(|bundle| bundle.get(key))
    }

    /// Re-express a failure's message in the bound locale, preserving its
    /// kind.
    ///
    /// A failure without a message keeps its kind name, untranslated. A
    /// present message is treated as a catalog key; the unknown-key
    /// fallback leaves it unchanged.
    pub fn translate_failure(&self, failure: OperationFailure) -> OperationFailure {
        match failure
            .message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
        {
            Some(message) => {
                let translated = self.lookup(message).unwrap_or(message).to_string();
                failure.with_message(translated)
            }
            None => {
                let name = failure.kind.name();
                failure.with_message(name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    use crate::error::{FailureKind, OperationFailure, TranslationError};
    use crate::locales;
    use crate::messages::{LocaleBundle, MessageCatalog};
    use crate::translator::*;

    fn catalog() -> Arc<MessageCatalog> {
        let mut en = LocaleBundle::new("en_US");
        en.insert("fruit", "Apple");
        en.insert("hello_word", "Hello {0}, be welcome!");

        let mut pt = LocaleBundle::new("pt_BR");
        pt.insert("fruit", "Maçã");
        pt.insert("hello_word", "Olá {0}, seja bem-vindo!");

        let mut messages = MessageCatalog::new();
        messages.insert(en);
        messages.insert(pt);
        Arc::new(messages)
    }

    fn translator(code: &str) -> Translator {
        Translator::new(locales::resolve(code).unwrap(), catalog())
    }

    #[test]
    fn test_format_number_uses_locale_separators() {
        let en = translator("en_US");
        assert_eq!(en.format_number(1000.01), "1,000.01");
        assert_eq!(en.format_number(1.01), "1.01");

        let pt = translator("pt_BR");
        assert_eq!(pt.format_number(1000.01), "1.000,01");
        assert_eq!(pt.format_number(1.01), "1,01");
    }

    #[test]
    fn test_format_number_trims_trailing_zeros() {
        let en = translator("en_US");
        assert_eq!(en.format_number(1.0), "1");
        assert_eq!(en.format_number(1000.0), "1,000");

        let pt = translator("pt_BR");
        assert_eq!(pt.format_number(1000.0), "1.000");
    }

    #[test]
    fn test_format_percent_scales_by_hundred() {
        let en = translator("en_US");
        assert_eq!(en.format_percent(0.1), "10%");
        assert_eq!(en.format_percent(1.0), "100%");
    }

    #[test]
    fn test_format_currency_uses_country_symbol() {
        assert_eq!(translator("pt_BR").format_currency(1000.01), "R$ 1.000,01");
        assert_eq!(translator("en_US").format_currency(1000.01), "$ 1,000.01");
        assert_eq!(translator("sq_AL").format_currency(1.0), "¤ 1");
    }

    #[test]
    fn test_format_date_renders_per_style() {
        let en = translator("en_US");
        let date = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();

        let short = en.format_date(date, FormatStyle::Short);
        assert!(short.contains("16"), "short date was {:?}", short);

        let medium = en.format_date(date, FormatStyle::Medium);
        assert!(medium.contains("2016"), "medium date was {:?}", medium);

        let long = en.format_date(date, FormatStyle::Long);
        assert!(long.contains("January"), "long date was {:?}", long);

        let full = en.format_date(date, FormatStyle::Full);
        assert!(full.contains("Friday"), "full date was {:?}", full);
    }

    #[test]
    fn test_format_date_varies_by_locale() {
        let date = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
        let en = translator("en_US").format_date(date, FormatStyle::Long);
        let pt = translator("pt_BR").format_date(date, FormatStyle::Long);
        assert_ne!(en, pt);
    }

    #[test]
    fn test_format_time_renders_per_style() {
        let en = translator("en_US");
        let time = NaiveTime::from_hms_opt(13, 5, 30).unwrap();

        let short = en.format_time(time, FormatStyle::Short);
        assert!(short.contains("1:05"), "short time was {:?}", short);

        let medium = en.format_time(time, FormatStyle::Medium);
        assert!(medium.contains("1:05:30"), "medium time was {:?}", medium);

        let pt = translator("pt_BR");
        let short = pt.format_time(time, FormatStyle::Short);
        assert!(short.contains("13:05"), "short time was {:?}", short);
    }

    #[test]
    fn test_translate_text_per_locale() {
        assert_eq!(translator("en_US").translate_text("fruit").unwrap(), "Apple");
        assert_eq!(translator("pt_BR").translate_text("fruit").unwrap(), "Maçã");
    }

    #[test]
    fn test_translate_text_unknown_key_falls_back_to_key() {
        let en = translator("en_US");
        assert_eq!(en.translate_text("unknown_key").unwrap(), "unknown_key");
    }

    #[test]
    fn test_translate_text_without_bundle_falls_back_to_key() {
        let fr = Translator::new(locales::resolve("fr_FR").unwrap(), catalog());
        assert_eq!(fr.translate_text("fruit").unwrap(), "fruit");
    }

    #[test]
    fn test_translate_text_blank_key_is_invalid() {
        let en = translator("en_US");
        assert!(matches!(
            en.translate_text(""),
            Err(TranslationError::InvalidArgument(_))
        ));
        assert!(matches!(
            en.translate_text("   "),
            Err(TranslationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_translate_text_with_args() {
        let en = translator("en_US");
        assert_eq!(
            en.translate_text_with_args("hello_word", &["Bruno"]).unwrap(),
            "Hello Bruno, be welcome!"
        );

        let pt = translator("pt_BR");
        assert_eq!(
            pt.translate_text_with_args("hello_word", &["Bruno"]).unwrap(),
            "Olá Bruno, seja bem-vindo!"
        );
    }

    #[test]
    fn test_translate_failure_translates_message() {
        let pt = translator("pt_BR");
        let failure = OperationFailure::new(FailureKind::InvalidInput, "fruit");
        let translated = pt.translate_failure(failure);
        assert_eq!(translated.kind, FailureKind::InvalidInput);
        assert_eq!(translated.message.as_deref(), Some("Maçã"));
    }

    #[test]
    fn test_translate_failure_unknown_message_unchanged() {
        let pt = translator("pt_BR");
        let failure = OperationFailure::new(FailureKind::Internal, "some raw message");
        let translated = pt.translate_failure(failure);
        assert_eq!(translated.kind, FailureKind::Internal);
        assert_eq!(translated.message.as_deref(), Some("some raw message"));
    }

    #[test]
    fn test_translate_failure_absent_message_becomes_kind_name() {
        let pt = translator("pt_BR");
        let failure = OperationFailure::without_message(FailureKind::NotFound);
        let translated = pt.translate_failure(failure);
        assert_eq!(translated.kind, FailureKind::NotFound);
        assert_eq!(translated.message.as_deref(), Some("not-found"));
    }

    #[test]
    fn test_translate_failure_blank_message_becomes_kind_name() {
        let pt = translator("pt_BR");
        let failure = OperationFailure::new(FailureKind::Unavailable, "  ");
        let translated = pt.translate_failure(failure);
        assert_eq!(translated.message.as_deref(), Some("unavailable"));
    }
}
