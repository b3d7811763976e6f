//! Document Management Frontend App
//!
//! Reads the session, builds the API client, loads the signed-in employee and
//! switches between pages.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dms_api::{ApiClient, ApiConfig, Employee};

use crate::context::AppContext;
use crate::pages::{BranchDepartmentsPage, BranchUsersPage, DocumentsPage, Page, SearchPage};
use crate::session::Session;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::load();
    let config = ApiConfig::from_build_env();
    log::info!("using document service at {}", config.base_url);
    let api = ApiClient::new(&config, session.token.clone());

    // State
    let current_user = signal::<Option<Employee>>(None);
    let page = RwSignal::new(Page::default());

    let ctx = AppContext::new(session, api, current_user);
    provide_context(ctx);

    // Load the signed-in employee once; role scoping and branch pages need it
    Effect::new(move |_| {
        let Some(user_id) = ctx.user_id() else {
            log::warn!("no user id in session; employee details not loaded");
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.employee(&user_id).await {
                Ok(employee) => {
                    log::info!("signed in as {} ({})", employee.name, employee.role);
                    ctx.set_current_user(employee);
                }
                Err(err) => log::error!("error fetching user details: {}", err),
            }
        });
    });

    // Fall back to Documents when the role no longer allows the page
    Effect::new(move |_| {
        let role = ctx.role();
        if !page.get().visible_to(role) {
            page.set(Page::Documents);
        }
    });

    view! {
        {move || match page.get() {
            Page::Documents => view! { <DocumentsPage page=page /> }.into_any(),
            Page::Search => view! { <SearchPage page=page /> }.into_any(),
            Page::BranchDepartments => view! { <BranchDepartmentsPage page=page /> }.into_any(),
            Page::BranchUsers => view! { <BranchUsersPage page=page /> }.into_any(),
        }}
    }
}
