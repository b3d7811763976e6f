//! Pager Controls Component
//!
//! Previous/next buttons and a "Page x of y" label under a table.

use leptos::prelude::*;

use crate::pagination::Pager;

#[component]
pub fn PagerControls(
    pager: RwSignal<Pager>,
    /// Length of the full (unpaginated) list
    #[prop(into)]
    total: Signal<usize>,
) -> impl IntoView {
    let label = move || {
        let current = pager.get();
        format!("Page {} of {}", current.page(), current.total_pages(total.get()))
    };

    view! {
        <div class="pager">
            <button
                class="pager-btn"
                disabled=move || !pager.get().has_prev()
                on:click=move |_| pager.update(|p| *p = p.prev())
            >
                "‹ Prev"
            </button>
            <span class="pager-label">{label}</span>
            <button
                class="pager-btn"
                disabled=move || !pager.get().has_next(total.get())
                on:click=move |_| {
                    let total = total.get_untracked();
                    pager.update(|p| *p = p.next(total));
                }
            >
                "Next ›"
            </button>
        </div>
    }
}
