//! Sidebar Component
//!
//! Page navigation, filtered by the signed-in employee's role.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::pages::Page;

#[component]
pub fn Sidebar(page: RwSignal<Page>) -> impl IntoView {
    let ctx = use_app_context();

    let links = move || {
        let role = ctx.role();
        Page::ALL
            .into_iter()
            .filter(|p| p.visible_to(role))
            .map(|target| {
                let class = move || {
                    if page.get() == target { "nav-link active" } else { "nav-link" }
                };
                view! {
                    <li>
                        <button class=class on:click=move |_| page.set(target)>
                            {target.label()}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="sidebar no-print">
            <div class="sidebar-brand">"D/MS"</div>
            <ul class="nav-list">{links}</ul>
        </nav>
    }
}
