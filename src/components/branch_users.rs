//! Branch User List Component
//!
//! Employees of the signed-in employee's branch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dms_api::Employee;

use crate::components::PagerControls;
use crate::context::use_app_context;
use crate::format::or_na;
use crate::pagination::Pager;

#[component]
pub fn BranchUserList() -> impl IntoView {
    let ctx = use_app_context();
    let (employees, set_employees) = signal(Vec::<Employee>::new());
    let pager = RwSignal::new(Pager::default());

    let branch_id = Memo::new(move |_| {
        ctx.current_user
            .with(|u| u.as_ref().and_then(|u| u.branch.as_ref().map(|b| b.id)))
    });

    Effect::new(move |_| {
        let Some(id) = branch_id.get() else {
            set_employees.set(Vec::new());
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.employees_by_branch(id).await {
                Ok(loaded) => {
                    log::info!("loaded {} employees of branch {}", loaded.len(), id);
                    set_employees.set(loaded);
                    pager.set(Pager::default());
                }
                Err(err) => log::error!("error fetching branch users: {}", err),
            }
        });
    });

    let total = Signal::derive(move || employees.with(Vec::len));

    let rows = move || {
        let current = pager.get();
        employees.with(|all| {
            current
                .slice(all)
                .iter()
                .enumerate()
                .map(|(row, emp)| {
                    let department = emp
                        .department
                        .as_ref()
                        .map(|d| d.name.clone())
                        .unwrap_or_default();
                    view! {
                        <tr>
                            <td>{current.serial(row)}</td>
                            <td>{or_na(&emp.name).to_string()}</td>
                            <td>{or_na(&emp.email).to_string()}</td>
                            <td>{or_na(&emp.mobile).to_string()}</td>
                            <td>{or_na(&emp.role).to_string()}</td>
                            <td>{or_na(&department).to_string()}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="branch-view">
            <h1 class="page-title">"BRANCH USERS"</h1>
            <Show
                when=move || branch_id.get().is_some()
                fallback=|| {
                    view! {
                        <p class="empty-state">
                            "Your branch is not known yet, so no users can be listed."
                        </p>
                    }
                }
            >
                <div class="card">
                    <table class="doc-table">
                        <thead>
                            <tr>
                                <th>"SR."</th>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Mobile"</th>
                                <th>"Role"</th>
                                <th>"Department"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                    <PagerControls pager=pager total=total />
                </div>
            </Show>
        </div>
    }
}
