use crate::shared::i18n_text::Tr;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="app-footer">
            <Tr path="footer.text" fallback="Masjid Ul Huda" />
        </footer>
    }
}
