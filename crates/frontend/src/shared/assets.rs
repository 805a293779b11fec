//! Static files fetched at startup

use contracts::enums::Language;
use contracts::shared::config::I18nPaths;
use contracts::shared::i18n::Translations;
use gloo_net::http::Request;
use serde_json::Value;

/// Fetch one translation dictionary
pub async fn fetch_dictionary(path: &str) -> Result<Value, String> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {}", path, e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch {}: HTTP {}", path, response.status()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| format!("Failed to parse {}: {}", path, e))
}

/// English first, then Malayalam. If either fails the page carries on with
/// empty dictionaries.
pub async fn load_translations(paths: &I18nPaths) -> Translations {
    let loaded = async {
        let en = fetch_dictionary(paths.path(Language::En)).await?;
        let ml = fetch_dictionary(paths.path(Language::Ml)).await?;
        Ok::<_, String>(Translations::new(en, ml))
    }
    .await;

    match loaded {
        Ok(translations) => translations,
        Err(e) => {
            log::error!("Failed to load translations: {}", e);
            Translations::default()
        }
    }
}
