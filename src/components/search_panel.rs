//! Search Panel Component
//!
//! Criteria form scoped by the operator's role, and the paginated results.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dms_api::{Branch, Category, Department, Document, NamedRef, SearchCriteria};

use crate::components::{DocumentModal, DocumentTable, DocumentViewer};
use crate::context::use_app_context;
use crate::notify;
use crate::pagination::Pager;
use crate::search::{CriteriaField, SearchScope};

const SEARCH_FAILED: &str = "There was an error searching documents. Please try again.";

fn options(items: Vec<NamedRef>) -> impl IntoView {
    items
        .into_iter()
        .map(|item| view! { <option value=item.id.to_string()>{item.name}</option> })
        .collect_view()
}

#[component]
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_app_context();

    let criteria = RwSignal::new(SearchCriteria::default());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (branches, set_branches) = signal(Vec::<Branch>::new());
    let (departments, set_departments) = signal(Vec::<Department>::new());
    let (results, set_results) = signal(Vec::<Document>::new());
    let (no_results, set_no_results) = signal(false);
    let (searching, set_searching) = signal(false);
    let pager = RwSignal::new(Pager::default());
    let viewer = DocumentViewer::new();

    let scope = Memo::new(move |_| ctx.current_user.with(|u| SearchScope::for_user(u.as_ref())));

    // Branch whose departments are listed: the pinned one, or the admin's pick
    let branch_id = Memo::new(move |_| {
        let scoped = scope.with(|s| criteria.with(|c| s.apply(c)));
        scoped.branch.parse::<u64>().ok()
    });

    // Categories and branches once on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.all_categories().await {
                Ok(loaded) => set_categories.set(loaded),
                Err(err) => log::error!("error fetching categories: {}", err),
            }
            match api.all_branches().await {
                Ok(loaded) => set_branches.set(loaded),
                Err(err) => log::error!("error fetching branches: {}", err),
            }
        });
    });

    // Branch admins open with their branch selected
    Effect::new(move |_| {
        if let Some(id) = scope.with(SearchScope::preset_branch) {
            criteria.update(|c| CriteriaField::Branch.set(c, id.to_string()));
        }
    });

    Effect::new(move |_| {
        let Some(id) = branch_id.get() else {
            set_departments.set(Vec::new());
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.departments_by_branch(id).await {
                // A slower answer for a previous branch must not win
                Ok(loaded) if branch_id.get_untracked() == Some(id) => set_departments.set(loaded),
                Ok(_) => log::debug!("dropping departments of stale branch {}", id),
                Err(err) => log::error!("error fetching departments: {}", err),
            }
        });
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let scoped = scope.with_untracked(|s| criteria.with_untracked(|c| s.apply(c)));
        log::debug!("searching with {:?}", scoped);
        let api = ctx.api();
        set_searching.set(true);

        spawn_local(async move {
            match api.search_documents(&scoped).await {
                Ok(found) => {
                    log::info!("search returned {} documents", found.len());
                    set_no_results.set(found.is_empty());
                    set_results.set(found);
                    pager.set(Pager::default());
                }
                Err(err) => {
                    set_results.set(Vec::new());
                    set_no_results.set(false);
                    notify::failure("searching documents", &err, SEARCH_FAILED);
                }
            }
            set_searching.set(false);
        });
    };

    let value_of = move |field: CriteriaField| move || criteria.with(|c| field.get(c).to_string());
    let on_field = move |field: CriteriaField| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            criteria.update(|c| field.set(c, value));
        }
    };

    let text_input = move |field: CriteriaField, placeholder: &'static str| {
        view! {
            <input
                type="text"
                placeholder=placeholder
                prop:value=value_of(field)
                on:input=on_field(field)
            />
        }
    };

    // Pinned selects show the scope's value rather than the criteria's
    let branch_value = move || branch_id.get().map(|id| id.to_string()).unwrap_or_default();
    let department_value = move || {
        let scoped = scope.with(|s| criteria.with(|c| s.apply(c)));
        scoped.department
    };

    let on_view = Callback::new(move |doc: Document| viewer.open(doc, ctx.api()));

    view! {
        <div class="search-panel">
            <h1 class="page-title">"SEARCH DOCUMENTS"</h1>
            <form class="card search-form" on:submit=on_search>
                <div class="form-grid">
                    {text_input(CriteriaField::FileNo, "File No.")}
                    {text_input(CriteriaField::Title, "Title")}
                    {text_input(CriteriaField::Subject, "Subject")}
                    {text_input(CriteriaField::Version, "Version")}

                    <select
                        name="category"
                        prop:value=value_of(CriteriaField::Category)
                        on:change=on_field(CriteriaField::Category)
                    >
                        <option value="">"All categories"</option>
                        {move || options(categories.get())}
                    </select>

                    <select
                        name="branch"
                        prop:value=branch_value
                        on:change=on_field(CriteriaField::Branch)
                        disabled=move || scope.with(SearchScope::branch_locked)
                    >
                        <option value="">"All branches"</option>
                        {move || options(branches.with(|all| scope.with(|s| s.branch_choices(all))))}
                    </select>

                    <select
                        name="department"
                        prop:value=department_value
                        on:change=on_field(CriteriaField::Department)
                        disabled=move || scope.with(|s| criteria.with(|c| s.department_locked(c)))
                    >
                        <option value="">"All departments"</option>
                        {move || {
                            options(departments.with(|all| scope.with(|s| s.department_choices(all))))
                        }}
                    </select>
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn primary" disabled=move || searching.get()>
                        {move || if searching.get() { "Searching..." } else { "Search" }}
                    </button>
                </div>
            </form>

            <Show
                when=move || !no_results.get()
                fallback=|| view! { <p class="empty-state">"No results found for your search."</p> }
            >
                <Show when=move || results.with(|r| !r.is_empty())>
                    <div class="card">
                        <DocumentTable documents=results pager=pager on_view=on_view />
                    </div>
                </Show>
            </Show>
            <DocumentModal viewer=viewer />
        </div>
    }
}
