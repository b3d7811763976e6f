//! Header Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::format::or_na;

/// Top bar with the sidebar toggle and the signed-in user.
#[component]
pub fn Header(sidebar_open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();

    let user_label = move || {
        ctx.current_user.with(|user| match user {
            Some(user) if !user.name.is_empty() => {
                format!("{} ({})", user.name, or_na(&user.role))
            }
            _ => ctx
                .user_id()
                .map(|id| format!("User {}", id))
                .unwrap_or_else(|| "Not signed in".to_string()),
        })
    };

    view! {
        <header class="app-header no-print">
            <button
                class="sidebar-toggle"
                title=move || if sidebar_open.get() { "Hide menu" } else { "Show menu" }
                on:click=move |_| sidebar_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <span class="app-title">"Document Management System"</span>
            <span class="user-label">{user_label}</span>
        </header>
    }
}
