//! Document Table Component
//!
//! Paginated table of document headers, shared by the pending list and the
//! search results.

use leptos::prelude::*;

use dms_api::Document;

use crate::components::PagerControls;
use crate::format::{category_label, format_date};
use crate::pagination::Pager;

#[component]
pub fn DocumentTable(
    #[prop(into)] documents: Signal<Vec<Document>>,
    pager: RwSignal<Pager>,
    /// Opens the read-only modal for a row
    #[prop(into)]
    on_view: Callback<Document>,
    /// Adds an Edit column when set
    #[prop(optional, into)]
    on_edit: Option<Callback<Document>>,
) -> impl IntoView {
    let total = Signal::derive(move || documents.with(Vec::len));

    // Rows of the current page with their running serial numbers
    let rows = move || {
        let current = pager.get();
        documents.with(|docs| {
            current
                .slice(docs)
                .iter()
                .enumerate()
                .map(|(row, doc)| (current.serial(row), doc.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="table-wrap">
            <table class="doc-table">
                <thead>
                    <tr>
                        <th>"SR."</th>
                        <th>"File No"</th>
                        <th>"Title"</th>
                        <th>"Subject"</th>
                        <th>"Version"</th>
                        <th>"Category"</th>
                        <th>"Approval Status"</th>
                        <th>"Uploaded Date"</th>
                        {on_edit.map(|_| view! { <th>"Edit"</th> })}
                        <th>"View"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows()
                            .into_iter()
                            .map(|(serial, doc)| {
                                let category = category_label(doc.category_master.as_ref());
                                let status = doc.approval_status.clone().unwrap_or_default();
                                let uploaded = format_date(doc.created_on);
                                let edit_cell = on_edit.map(|on_edit| {
                                    let doc = doc.clone();
                                    view! {
                                        <td>
                                            <button
                                                class="icon-btn edit"
                                                title="Edit"
                                                on:click=move |_| on_edit.run(doc.clone())
                                            >
                                                "✎"
                                            </button>
                                        </td>
                                    }
                                });
                                let view_doc = doc.clone();
                                view! {
                                    <tr>
                                        <td>{serial}</td>
                                        <td>{doc.file_no}</td>
                                        <td>{doc.title}</td>
                                        <td>{doc.subject}</td>
                                        <td>{doc.version}</td>
                                        <td>{category}</td>
                                        <td>{status}</td>
                                        <td>{uploaded}</td>
                                        {edit_cell}
                                        <td>
                                            <button
                                                class="icon-btn view"
                                                title="View"
                                                on:click=move |_| on_view.run(view_doc.clone())
                                            >
                                                "👁"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <PagerControls pager=pager total=total />
        </div>
    }
}
