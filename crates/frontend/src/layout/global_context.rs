use crate::shared::assets::load_translations;
use crate::system::storage::session_store;
use contracts::domain::storage::LANG_KEY;
use contracts::domain::SessionStore;
use contracts::enums::Language;
use contracts::shared::config::AppConfig;
use contracts::shared::i18n::Translations;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// State shared by every component of one page view
#[derive(Clone, Copy)]
pub struct AppContext {
    pub language: RwSignal<Language>,
    pub translations: RwSignal<Translations>,
    pub translations_ready: RwSignal<bool>,
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig, language: Language) -> Self {
        Self {
            language: RwSignal::new(language),
            translations: RwSignal::new(Translations::default()),
            translations_ready: RwSignal::new(false),
            config: StoredValue::new(config),
        }
    }

    /// Fetch both dictionaries, then mark the page ready.
    /// The page also becomes ready when loading fails, with blank texts.
    pub fn load_translations(&self) {
        let paths = self.config.with_value(|config| config.i18n.clone());
        let translations = self.translations;
        let ready = self.translations_ready;
        spawn_local(async move {
            translations.set(load_translations(&paths).await);
            ready.set(true);
        });
    }

    /// Text at `key` in the active language (tracked)
    pub fn t(&self, key: &str) -> String {
        let language = self.language.get();
        self.translations.with(|t| t.lookup(language, key))
    }

    /// Translated category title, or the code itself (tracked)
    pub fn category_title(&self, code: &str) -> String {
        let language = self.language.get();
        self.translations.with(|t| t.category_title(language, code))
    }

    pub fn set_language(&self, language: Language) {
        leptos::logging::log!("language: {}", language);
        session_store().set(LANG_KEY, language.code());
        self.language.set(language);
    }

    pub fn switch_language(&self) {
        self.set_language(self.language.get_untracked().toggled());
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&AppConfig) -> R) -> R {
        self.config.with_value(f)
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found. Render pages inside App.")
}
