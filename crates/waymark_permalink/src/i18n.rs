use std::collections::BTreeMap;

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

/// message keys used by permalink navigation
pub mod keys {
    pub const PERMALINK_FAIL_ID: &str = "notification-permalink-fail-id";
    pub const PERMALINK_ROUTE: &str = "notification-permalink-route";
    pub const PERMALINK_FEATURE: &str = "notification-permalink-feature";
}

pub trait Localize {
    /// returns the message for `key` in the current locale
    fn translate(&self, key: &str) -> String;
}

#[derive(Diagnostic, Debug, Error)]
pub enum LocalizationError {
    #[error("failed to parse string table for locale {locale}: {source}")]
    #[diagnostic(code(localization_error::invalid_table))]
    InvalidTable {
        locale: String,
        source: serde_json::Error,
    },
}

/// String tables per locale.
/// Lookup falls back to the english table and then to the key itself, so a missing translation is visible but never fatal.
#[derive(Debug, Clone)]
pub struct Localization {
    locale: String,
    tables: BTreeMap<String, BTreeMap<String, String>>,
}

impl Localization {
    pub const FALLBACK_LOCALE: &'static str = "en";
    const EN_TABLE: [(&'static str, &'static str); 3] = [
        (
            keys::PERMALINK_FAIL_ID,
            "Could not find the map element for this link.",
        ),
        (keys::PERMALINK_ROUTE, "Showing the linked route."),
        (keys::PERMALINK_FEATURE, "Showing the linked marker."),
    ];

    pub fn new(locale: impl Into<String>) -> Self {
        let en = Self::EN_TABLE
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            locale: locale.into(),
            tables: BTreeMap::from([(Self::FALLBACK_LOCALE.to_owned(), en)]),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Merges a flat json object of `key: message` into the table of `locale`.
    pub fn add_table_json(&mut self, locale: &str, src: &str) -> Result<(), LocalizationError> {
        let table: BTreeMap<String, String> =
            serde_json::from_str(src).map_err(|source| LocalizationError::InvalidTable {
                locale: locale.to_owned(),
                source,
            })?;
        debug!(locale, messages = table.len(), "adding string table");
        self.tables
            .entry(locale.to_owned())
            .or_default()
            .extend(table);
        Ok(())
    }
}

impl Default for Localization {
    fn default() -> Self {
        Self::new(Self::FALLBACK_LOCALE)
    }
}

impl Localize for Localization {
    fn translate(&self, key: &str) -> String {
        [self.locale.as_str(), Self::FALLBACK_LOCALE]
            .into_iter()
            .find_map(|locale| self.tables.get(locale).and_then(|t| t.get(key)))
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn english_is_built_in() {
        let l10n = Localization::default();
        assert_eq!(
            l10n.translate(keys::PERMALINK_ROUTE),
            "Showing the linked route."
        );
        assert_eq!(l10n.locale(), "en");
    }

    #[test]
    fn falls_back_to_english_then_key() {
        let mut l10n = Localization::new("de");
        l10n.add_table_json("de", r#"{ "notification-permalink-route": "Route wird angezeigt." }"#)
            .expect("failed to add table");
        assert_eq!(
            l10n.translate(keys::PERMALINK_ROUTE),
            "Route wird angezeigt."
        );
        assert_eq!(
            l10n.translate(keys::PERMALINK_FEATURE),
            "Showing the linked marker."
        );
        assert_eq!(l10n.translate("no-such-key"), "no-such-key");
        l10n.set_locale("en");
        assert_eq!(
            l10n.translate(keys::PERMALINK_ROUTE),
            "Showing the linked route."
        );
    }

    #[test]
    fn invalid_table_is_an_error() {
        let mut l10n = Localization::default();
        assert!(matches!(
            l10n.add_table_json("fr", "[1, 2]"),
            Err(LocalizationError::InvalidTable { locale, .. }) if locale == "fr"
        ));
    }
}
