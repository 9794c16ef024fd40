use super::{Locale, StringResolver, UiString};
use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

const LOG_TARGET: &str = "      i18n";

/// One entry of a JSON message catalog.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    message: String,
}

/// A [`StringResolver`] backed by an optional message catalog.
///
/// Catalogs are JSON objects mapping message keys to `{ "message": "..." }` entries.
/// Extra fields in an entry (descriptions for translators, for instance) are ignored.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    locale: Locale,
    catalog: HashMap<String, String>,
}

impl LocaleStrings {
    /// A resolver with no catalog, producing English text.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            catalog: HashMap::new(),
        }
    }

    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid catalog.
    pub fn from_catalog_json(locale: Locale, json: &str) -> Result<Self> {
        let entries: HashMap<String, CatalogEntry> =
            serde_json::from_str(json).into_app_err_with(|| format!("parsing {locale} message catalog"))?;

        Ok(Self {
            locale,
            catalog: entries.into_iter().map(|(key, entry)| (key, entry.message)).collect(),
        })
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn load(locale: Locale, path: &Utf8Path) -> Result<Self> {
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading message catalog '{path}'"))?;
        let strings = Self::from_catalog_json(locale, &text).into_app_err_with(|| format!("loading message catalog '{path}'"))?;
        log::debug!(target: LOG_TARGET, "Loaded {} {locale} messages from '{path}'", strings.catalog.len());
        Ok(strings)
    }
}

impl StringResolver for LocaleStrings {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn resolve(&self, message: &UiString) -> String {
        if let Some(text) = self.catalog.get(message.key) {
            return text.clone();
        }

        if !self.catalog.is_empty() {
            log::trace!(target: LOG_TARGET, "No {} translation for '{}', using English", self.locale, message.key);
        }

        message.message.to_string()
    }
}
