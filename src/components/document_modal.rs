//! Document Modal Component
//!
//! Read-only view of one document header and its attached files.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dms_api::{ApiClient, AttachedFile, Document};

use crate::context::use_app_context;
use crate::files;
use crate::format::{category_label, format_date, or_na};
use crate::notify;

const OPEN_FAILED: &str = "There was an error opening the file. Please try again.";

/// Selected document and its attached files. Copy, so both the table's View
/// button and the modal can hold it.
#[derive(Clone, Copy)]
pub struct DocumentViewer {
    selected: RwSignal<Option<Document>>,
    files: RwSignal<Vec<AttachedFile>>,
}

impl Default for DocumentViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentViewer {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(None),
            files: RwSignal::new(Vec::new()),
        }
    }

    /// Shows `doc` at once and fills in its files when the fetch returns.
    pub fn open(&self, doc: Document, api: ApiClient) {
        let id = doc.id;
        let (selected, files) = (self.selected, self.files);
        files.set(Vec::new());
        selected.set(Some(doc));

        spawn_local(async move {
            match api.attached_files(id).await {
                Ok(found) => {
                    log::debug!("document {} has {} attached files", id, found.len());
                    let still_open =
                        selected.with_untracked(|s| s.as_ref().map(|d| d.id) == Some(id));
                    if still_open {
                        files.set(found);
                    }
                }
                Err(err) => notify::failure(
                    "fetching attached files",
                    &err,
                    &format!("Failed to fetch document paths: {}", err),
                ),
            }
        });
    }

    pub fn close(&self) {
        self.selected.set(None);
        self.files.set(Vec::new());
    }
}

#[component]
pub fn DocumentModal(viewer: DocumentViewer) -> impl IntoView {
    let ctx = use_app_context();

    let open_file = move |file: AttachedFile| {
        let api = ctx.api();
        spawn_local(async move {
            match api.open_attached_file(&file).await {
                Ok(content) => {
                    if let Err(e) = files::open_in_new_tab(&content) {
                        notify::failure("opening file", &format!("{:?}", e), OPEN_FAILED);
                    }
                }
                Err(err) => notify::failure("fetching file", &err, OPEN_FAILED),
            }
        });
    };

    let attached = move || {
        let list = viewer.files.get();
        if list.is_empty() {
            return view! { <p class="muted">"No attached files available."</p> }.into_any();
        }
        view! {
            <ul class="attached-list">
                {list
                    .into_iter()
                    .map(|file| {
                        let name = file.doc_name.clone();
                        view! {
                            <li>
                                <span class="attached-name">{name}</span>
                                <button class="btn small" on:click=move |_| open_file(file.clone())>
                                    "Open"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    move || {
        viewer.selected.get().map(|doc| {
            let uploaded = format_date(doc.created_on);
            view! {
                <div class="modal-backdrop">
                    <div class="modal">
                        <button
                            class="modal-btn print no-print"
                            title="Print"
                            on:click=move |_| files::print_page()
                        >
                            "🖨"
                        </button>
                        <button
                            class="modal-btn close no-print"
                            title="Close"
                            on:click=move |_| viewer.close()
                        >
                            "✕"
                        </button>

                        <div class="modal-top">
                            <div class="logo">
                                <span class="logo-d">"D"</span>
                                <span class="logo-ms">"MS"</span>
                            </div>
                            <p>
                                <strong>"Uploaded Date: "</strong>
                                {or_na(&uploaded).to_string()}
                            </p>
                        </div>

                        <div class="modal-details">
                            <p><strong>"File No.: "</strong>{or_na(&doc.file_no).to_string()}</p>
                            <p><strong>"Title: "</strong>{or_na(&doc.title).to_string()}</p>
                            <p><strong>"Subject: "</strong>{or_na(&doc.subject).to_string()}</p>
                            <p><strong>"Version: "</strong>{or_na(&doc.version).to_string()}</p>
                            <p>
                                <strong>"Category: "</strong>
                                {category_label(doc.category_master.as_ref())}
                            </p>
                        </div>

                        <div class="modal-files">
                            <h2>"Attached Files"</h2>
                            {attached}
                        </div>
                    </div>
                </div>
            }
        })
    }
}
