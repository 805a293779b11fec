//! Translation dictionaries and dotted-path lookup.
//!
//! Each language has one nested JSON document, e.g.
//! `{"donation": {"zakat": {"title": "Zakat"}}}`, addressed with keys such as
//! `donation.zakat.title`. A missing key resolves to an empty string; there
//! is no fallback to the other language.

use crate::enums::Language;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("invalid {language} dictionary: {source}")]
    Parse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
}

/// Walk `path` segment by segment through `dictionary`
pub fn lookup_path<'a>(dictionary: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(dictionary, |current, segment| current.get(segment))
}

/// Both dictionaries; `Value::Null` stands for one that failed to load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translations {
    en: Value,
    ml: Value,
}

impl Translations {
    pub fn new(en: Value, ml: Value) -> Self {
        Self { en, ml }
    }

    pub fn from_json(en: &str, ml: &str) -> Result<Self, I18nError> {
        let parse = |language: Language, text: &str| {
            serde_json::from_str(text).map_err(|source| I18nError::Parse { language, source })
        };
        Ok(Self {
            en: parse(Language::En, en)?,
            ml: parse(Language::Ml, ml)?,
        })
    }

    pub fn dictionary(&self, language: Language) -> &Value {
        match language {
            Language::En => &self.en,
            Language::Ml => &self.ml,
        }
    }

    pub fn is_loaded(&self, language: Language) -> bool {
        self.dictionary(language).is_object()
    }

    /// Raw node at `key`, for sections that hold more than one string
    pub fn entry(&self, language: Language, key: &str) -> Option<&Value> {
        lookup_path(self.dictionary(language), key)
    }

    /// Text at `key`, or an empty string
    pub fn lookup(&self, language: Language, key: &str) -> String {
        self.entry(language, key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// New text for an element tagged with `key`.
    ///
    /// An element keeps its current text when the key has no translation.
    pub fn retranslate(&self, language: Language, key: &str, current: &str) -> String {
        let translated = self.lookup(language, key);
        if translated.is_empty() {
            current.to_string()
        } else {
            translated
        }
    }

    /// Translated category title, or the raw code when there is none
    pub fn category_title(&self, language: Language, code: &str) -> String {
        let title = self.lookup(language, &format!("donation.{}.title", code));
        if title.is_empty() {
            code.to_string()
        } else {
            title
        }
    }
}
