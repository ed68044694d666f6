// File: crates/minichart/src/format.rs
// Summary: Locale-aware thousands grouping for bar value labels.

use num_format::{Locale, ToFormattedString};

/// Formats bar values with the grouping rules of a configurable locale.
///
/// Values are magnitudes (counts, durations), so they are rounded to whole
/// numbers before grouping.
#[derive(Clone, Copy, Debug)]
pub struct ValueFormat {
    locale: Locale,
}

impl ValueFormat {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Map a user-facing locale tag to a grouping locale.
    /// Unknown tags fall back to `en`.
    pub fn from_tag(tag: &str) -> Self {
        let locale = match tag.to_ascii_lowercase().as_str() {
            "ru" | "ru_ru" | "ru-ru" => Locale::ru,
            "de" | "de_de" | "de-de" => Locale::de,
            "fr" | "fr_fr" | "fr-fr" => Locale::fr,
            "en" | "en_us" | "en-us" => Locale::en,
            _ => Locale::en,
        };
        Self { locale }
    }

    pub fn format(&self, value: f64) -> String {
        let v = if value.is_finite() { value.max(0.0).round() as i64 } else { 0 };
        v.to_formatted_string(&self.locale)
    }
}

impl Default for ValueFormat {
    /// The dashboards this renderer was written for group values the
    /// Russian way.
    fn default() -> Self {
        Self::new(Locale::ru)
    }
}
