use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Translated text tagged with its dictionary key.
///
/// Re-renders on language change. While the key has no translation the
/// previous text stays, starting from `fallback`.
#[component]
pub fn Tr(
    /// Dotted dictionary key, e.g. `donation.zakat.title`
    #[prop(into)]
    path: String,
    /// Text shown until a translation is found
    #[prop(optional, into)]
    fallback: String,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let tag = path.clone();

    let text = Memo::new(move |previous: Option<&String>| {
        let current = previous.cloned().unwrap_or_else(|| fallback.clone());
        let language = ctx.language.get();
        ctx.translations
            .with(|t| t.retranslate(language, &path, &current))
    });

    view! {
        <span data-i18n=tag class=move || class.get().unwrap_or_default()>
            {move || text.get()}
        </span>
    }
}
