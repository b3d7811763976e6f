//! Page Shell Component
//!
//! Sidebar + header + content layout shared by every page.

use leptos::prelude::*;

use crate::components::{Header, Sidebar};
use crate::pages::Page;

#[component]
pub fn PageShell(page: RwSignal<Page>, children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(true);

    view! {
        <div class="page-shell">
            <Show when=move || sidebar_open.get()>
                <Sidebar page=page />
            </Show>
            <div class="page-main">
                <Header sidebar_open=sidebar_open />
                <main class="page-content">{children()}</main>
            </div>
        </div>
    }
}
