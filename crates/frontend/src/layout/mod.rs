pub mod footer;
pub mod global_context;
pub mod top_header;

use crate::pages::page_view;
use contracts::domain::Page;
use footer::Footer;
use leptos::prelude::*;
use top_header::TopHeader;

/// Page frame shared by every page.
///
/// ```text
/// +-----------------------------+
/// |  TopHeader (back, language) |
/// +-----------------------------+
/// |          page body          |
/// +-----------------------------+
/// |           Footer            |
/// +-----------------------------+
/// ```
#[component]
pub fn Shell(page: Page) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader page=page />
            <main class="app-main">
                {page_view(page)}
            </main>
            <Footer />
        </div>
    }
}
