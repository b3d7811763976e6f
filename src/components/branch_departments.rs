//! Branch Department List Component
//!
//! Departments of the signed-in employee's branch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dms_api::Department;

use crate::components::PagerControls;
use crate::context::use_app_context;
use crate::pagination::Pager;

#[component]
pub fn BranchDepartmentList() -> impl IntoView {
    let ctx = use_app_context();
    let (departments, set_departments) = signal(Vec::<Department>::new());
    let pager = RwSignal::new(Pager::default());

    let branch = Memo::new(move |_| {
        ctx.current_user
            .with(|u| u.as_ref().and_then(|u| u.branch.clone()))
    });

    Effect::new(move |_| {
        let Some(branch_id) = branch.with(|b| b.as_ref().map(|b| b.id)) else {
            set_departments.set(Vec::new());
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.departments_by_branch(branch_id).await {
                Ok(loaded) => {
                    log::info!("loaded {} departments of branch {}", loaded.len(), branch_id);
                    set_departments.set(loaded);
                    pager.set(Pager::default());
                }
                Err(err) => log::error!("error fetching departments: {}", err),
            }
        });
    });

    let total = Signal::derive(move || departments.with(Vec::len));

    let rows = move || {
        let current = pager.get();
        departments.with(|all| {
            current
                .slice(all)
                .iter()
                .enumerate()
                .map(|(row, dept)| {
                    view! {
                        <tr>
                            <td>{current.serial(row)}</td>
                            <td>{dept.name.clone()}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    let title = move || {
        branch.with(|b| match b {
            Some(b) => format!("DEPARTMENTS - {}", b.name),
            None => "DEPARTMENTS".to_string(),
        })
    };

    view! {
        <div class="branch-view">
            <h1 class="page-title">{title}</h1>
            <Show
                when=move || branch.with(Option::is_some)
                fallback=|| {
                    view! {
                        <p class="empty-state">
                            "Your branch is not known yet, so no departments can be listed."
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
