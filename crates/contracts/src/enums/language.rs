use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the site is translated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ml,
}

impl Language {
    /// Code used in session storage, `<html lang>` and file names
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ml => "ml",
        }
    }

    /// Name of the language written in that language
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ml => "മലയാളം",
        }
    }

    /// Short label on the header's language toggle
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ml => "മല",
        }
    }

    /// Extra body class applied while this language is active
    pub fn body_font_class(&self) -> Option<&'static str> {
        match self {
            Language::En => None,
            Language::Ml => Some("font-malayalam"),
        }
    }

    /// The other language
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ml,
            Language::Ml => Language::En,
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::En, Language::Ml]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ml" => Some(Language::Ml),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
