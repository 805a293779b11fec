//! Site configuration: payment pages, fidyah rate and asset paths.
//!
//! The configuration is a TOML document compiled into the bundle, so changing
//! a payment link means editing `config/app.toml` and rebuilding.

use crate::enums::{DonationCategory, Language};
use serde::Deserialize;
use thiserror::Error;

/// Configuration embedded in the bundle
const EMBEDDED_CONFIG: &str = include_str!("../../config/app.toml");

/// Payment page used when nothing better is known
const FALLBACK_PAYMENT_URL: &str = "https://rzp.io/rzp/masjid-ul-huda-infaq";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub payment_pages: PaymentPages,
    pub settings: Settings,
    #[serde(default)]
    pub i18n: I18nPaths,
}

/// Public and anonymous variants of one hosted payment page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentUrls {
    pub public: String,
    pub anonymous: String,
}

impl PaymentUrls {
    pub fn shared(url: &str) -> Self {
        Self {
            public: url.to_string(),
            anonymous: url.to_string(),
        }
    }

    pub fn for_anonymity(&self, is_anonymous: bool) -> &str {
        if is_anonymous {
            &self.anonymous
        } else {
            &self.public
        }
    }
}

/// Category × anonymity → payment page table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentPages {
    pub zakat: PaymentUrls,
    pub fidyah: PaymentUrls,
    pub kaffarah: PaymentUrls,
    pub sadaqah: PaymentUrls,
    pub masjid_fund: PaymentUrls,
}

impl PaymentPages {
    /// Every category and variant pointing at the same page
    pub fn shared(url: &str) -> Self {
        Self {
            zakat: PaymentUrls::shared(url),
            fidyah: PaymentUrls::shared(url),
            kaffarah: PaymentUrls::shared(url),
            sadaqah: PaymentUrls::shared(url),
            masjid_fund: PaymentUrls::shared(url),
        }
    }

    pub fn urls(&self, category: DonationCategory) -> &PaymentUrls {
        match category {
            DonationCategory::Zakat => &self.zakat,
            DonationCategory::Fidyah => &self.fidyah,
            DonationCategory::Kaffarah => &self.kaffarah,
            DonationCategory::Sadaqah => &self.sadaqah,
            DonationCategory::MasjidFund => &self.masjid_fund,
        }
    }

    /// Resolve the payment page for a category code.
    ///
    /// Unknown codes are logged and resolve to the public page of the
    /// default category.
    pub fn resolve(&self, category_code: &str, is_anonymous: bool) -> &str {
        match DonationCategory::from_code(category_code) {
            Some(category) => self.urls(category).for_anonymity(is_anonymous),
            None => {
                log::error!("Unknown category: {}", category_code);
                &self.urls(DonationCategory::default()).public
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// INR per missed fasting day
    pub fidyah_rate: u32,
    pub whatsapp_link: String,
    /// Quick-pick amounts on the give page
    #[serde(default = "default_preset_amounts")]
    pub preset_amounts: Vec<u32>,
}

fn default_preset_amounts() -> Vec<u32> {
    vec![100, 500, 1000, 5000]
}

/// Where the translation dictionaries are fetched from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct I18nPaths {
    pub en: String,
    pub ml: String,
}

impl I18nPaths {
    pub fn path(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ml => &self.ml,
        }
    }
}

impl Default for I18nPaths {
    fn default() -> Self {
        Self {
            en: "/i18n/en.json".to_string(),
            ml: "/i18n/ml.json".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            payment_pages: PaymentPages::shared(FALLBACK_PAYMENT_URL),
            settings: Settings {
                fidyah_rate: 120,
                whatsapp_link: "https://chat.whatsapp.com/PASTE_LINK".to_string(),
                preset_amounts: default_preset_amounts(),
            },
            i18n: I18nPaths::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse the embedded configuration, falling back to built-in defaults
    pub fn load() -> Self {
        match Self::from_toml(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }

    pub fn payment_url(&self, category_code: &str, is_anonymous: bool) -> &str {
        self.payment_pages.resolve(category_code, is_anonymous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_pages() -> PaymentPages {
        let urls = |name: &str| PaymentUrls {
            public: format!("https://pay.example/{}/public", name),
            anonymous: format!("https://pay.example/{}/anon", name),
        };
        PaymentPages {
            zakat: urls("zakat"),
            fidyah: urls("fidyah"),
            kaffarah: urls("kaffarah"),
            sadaqah: urls("sadaqah"),
            masjid_fund: urls("masjid"),
        }
    }

    #[test]
    fn test_embedded_config_loads() {
        let config = AppConfig::from_toml(EMBEDDED_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.settings.fidyah_rate, 120);
        assert_eq!(config.i18n.path(Language::Ml), "/i18n/ml.json");
        assert!(!config.settings.preset_amounts.is_empty());
    }

    #[test]
    fn test_resolve_known_categories() {
        let pages = distinct_pages();
        assert_eq!(pages.resolve("zakat", false), "https://pay.example/zakat/public");
        assert_eq!(pages.resolve("zakat", true), "https://pay.example/zakat/anon");
        assert_eq!(pages.resolve("fidyah", false), "https://pay.example/fidyah/public");
        assert_eq!(pages.resolve("masjid_fund", true), "https://pay.example/masjid/anon");
    }

    #[test]
    fn test_resolve_unknown_category_falls_back() {
        let pages = distinct_pages();
        assert_eq!(pages.resolve("interest", false), "https://pay.example/masjid/public");
        assert_eq!(pages.resolve("interest", true), "https://pay.example/masjid/public");
        assert_eq!(pages.resolve("", false), "https://pay.example/masjid/public");
    }

    #[test]
    fn test_missing_optional_sections_use_defaults() {
        let toml = r#"
[payment_pages.zakat]
public = "a"
anonymous = "b"
[payment_pages.fidyah]
public = "a"
anonymous = "b"
[payment_pages.kaffarah]
public = "a"
anonymous = "b"
[payment_pages.sadaqah]
public = "a"
anonymous = "b"
[payment_pages.masjid_fund]
public = "a"
anonymous = "b"
[settings]
fidyah_rate = 150
whatsapp_link = "https://chat.whatsapp.com/x"
"#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.settings.fidyah_rate, 150);
        assert_eq!(config.settings.preset_amounts, vec![100, 500, 1000, 5000]);
        assert_eq!(config.i18n, I18nPaths::default());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(AppConfig::from_toml("[settings]\nfidyah_rate = \"many\"").is_err());
    }
}
