use crate::layout::global_context::AppContext;
use crate::layout::Shell;
use crate::shared::dom::apply_document_language;
use crate::shared::navigation::{current_path, navigate};
use crate::system::storage::session_store;
use contracts::domain::storage::saved_language;
use contracts::domain::Page;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let page = Page::from_path(&current_path());
    let saved = saved_language(&session_store());

    // Pages past the language chooser need a language picked first
    if let Some(target) = page.startup_redirect(saved) {
        navigate(target);
        return ().into_any();
    }

    // One context per page view; it goes away with the page.
    let ctx = AppContext::new(AppConfig::load(), saved.unwrap_or_default());
    provide_context(ctx);
    ctx.load_translations();

    Effect::new(move |_| {
        let language = ctx.language.get();
        ctx.translations
            .with(|translations| apply_document_language(language, translations));
    });

    view! {
        <Show
            when=move || ctx.translations_ready.get()
            fallback=|| view! { <div class="app-loading" aria-busy="true"></div> }
        >
            <Shell page=page />
        </Show>
    }
    .into_any()
}
