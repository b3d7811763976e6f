//! Document Management Component
//!
//! New/edit document form with file upload, the operator's pending documents,
//! and the read-only document modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use web_sys::HtmlInputElement;

use dms_api::{ApiClient, Category, Document};

use crate::components::{DocumentModal, DocumentTable, DocumentViewer, UploadedFiles};
use crate::context::use_app_context;
use crate::files;
use crate::form::{find_category, DocumentForm, DocumentFormStoreFields};
use crate::notify;
use crate::pagination::Pager;

const UPLOAD_FAILED: &str = "There was an error uploading the file. Please try again.";
const SAVE_FAILED: &str = "There was an error saving the document. Please try again.";
const UPDATE_FAILED: &str = "An error occurred while updating the document";
const NO_EMPLOYEE: &str = "Your session has no user id. Please sign in again.";

/// Reads every chosen file and posts them in one multipart request.
async fn upload_selected(
    api: &ApiClient,
    category: &str,
    chosen: &[web_sys::File],
) -> Result<Vec<String>, String> {
    let mut uploads = Vec::with_capacity(chosen.len());
    for file in chosen {
        uploads.push(files::read_upload(file).await?);
    }
    api.upload_files(category, uploads)
        .await
        .map_err(|e| e.to_string())
}

#[component]
pub fn DocumentManagement(
    /// Disables the text inputs (read-only mode)
    #[prop(optional)]
    fields_disabled: bool,
) -> impl IntoView {
    let ctx = use_app_context();

    // State
    let form = Store::new(DocumentForm::default());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (documents, set_documents) = signal(Vec::<Document>::new());
    let pager = RwSignal::new(Pager::default());
    let (selected_files, set_selected_files) = signal_local(Vec::<web_sys::File>::new());
    let (uploading, set_uploading) = signal(false);
    let file_input = NodeRef::<leptos::html::Input>::new();
    let viewer = DocumentViewer::new();

    let load_documents = move || {
        let Some(user_id) = ctx.user_id() else {
            log::warn!("no user id in session; pending documents not loaded");
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.pending_documents(&user_id).await {
                Ok(docs) => {
                    log::info!("loaded {} pending documents", docs.len());
                    let total = docs.len();
                    set_documents.set(docs);
                    pager.update(|p| *p = p.clamped(total));
                }
                Err(err) => log::error!("error fetching documents: {}", err),
            }
        });
    };

    // Load categories and pending documents on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.active_categories().await {
                Ok(loaded) => set_categories.set(loaded),
                Err(err) => log::error!("error fetching categories: {}", err),
            }
        });
        load_documents();
    });

    let upload_enabled = move || {
        let chosen = selected_files.with(Vec::len);
        !uploading.get() && form.with(|f| f.can_upload(chosen))
    };

    let on_category_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let chosen = categories.with_untracked(|all| find_category(all, &value));
        form.category().set(chosen);
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let chosen = files::selected_files(&input);
        log::debug!("{} file(s) selected", chosen.len());
        set_selected_files.set(chosen);
    };

    let on_upload = move |_| {
        let chosen = selected_files.get_untracked();
        if chosen.is_empty() {
            notify::alert("Please select at least one file to upload.");
            return;
        }
        let category = form.with_untracked(DocumentForm::upload_category);
        let names: Vec<String> = chosen.iter().map(|f| f.name()).collect();
        let api = ctx.api();
        set_uploading.set(true);

        spawn_local(async move {
            match upload_selected(&api, &category, &chosen).await {
                Ok(paths) => {
                    log::info!("files uploaded successfully: {:?}", paths);
                    form.update(|f| f.record_upload(paths, names));
                    notify::alert("Files uploaded successfully!");
                    set_selected_files.set(Vec::new());
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(err) => notify::failure("uploading files", &err, UPLOAD_FAILED),
            }
            set_uploading.set(false);
        });
    };

    // Save or update, depending on whether a header is being edited
    let submit = move |snapshot: DocumentForm| {
        let Some(employee_id) = ctx.employee_id() else {
            notify::alert(NO_EMPLOYEE);
            return;
        };
        let payload = match snapshot.to_payload(employee_id) {
            Ok(payload) => payload,
            Err(err) => {
                notify::alert(&err.to_string());
                return;
            }
        };
        let updating = snapshot.is_editing();
        let api = ctx.api();

        spawn_local(async move {
            let result = if updating {
                api.update_document(&payload).await
            } else {
                api.save_document(&payload).await
            };
            match result {
                Ok(()) => {
                    if updating {
                        log::info!("document {:?} updated", payload.document_header.id);
                    } else {
                        notify::alert("Document saved successfully!");
                    }
                    form.update(DocumentForm::reset);
                    load_documents();
                }
                Err(err) if updating => notify::failure("updating document", &err, UPDATE_FAILED),
                Err(err) => notify::failure("saving document", &err, SAVE_FAILED),
            }
        });
    };

    let on_add = move |_| {
        let snapshot = form.get_untracked();
        if let Err(err) = snapshot.validate_for_save() {
            notify::alert(&err.to_string());
            return;
        }
        submit(snapshot);
    };

    let on_update = move |_| submit(form.get_untracked());

    let on_edit = Callback::new(move |doc: Document| {
        log::debug!("editing document {}", doc.id);
        form.update(|f| f.load_document(&doc));
    });

    let on_view = Callback::new(move |doc: Document| viewer.open(doc, ctx.api()));

    let on_discard = Callback::new(move |index: usize| {
        form.update(|f| {
            if !f.discard_file(index) {
                log::error!("invalid index: {}", index);
            }
        });
    });

    let on_discard_all = Callback::new(move |_: ()| form.update(DocumentForm::discard_all));

    view! {
        <div class="document-management">
            <h1 class="page-title">"DOCUMENT MANAGEMENT"</h1>
            <div class="card">
                <div class="form-panel">
                    <div class="form-grid">
                        <input
                            type="text"
                            placeholder="File No."
                            name="fileNo"
                            prop:value=move || form.file_no().get()
                            on:input=move |ev| form.file_no().set(event_target_value(&ev))
                            disabled=fields_disabled
                        />
                        <input
                            type="text"
                            placeholder="Title"
                            name="title"
                            prop:value=move || form.title().get()
                            on:input=move |ev| form.title().set(event_target_value(&ev))
                            disabled=fields_disabled
                        />
                        <input
                            type="text"
                            placeholder="Subject"
                            name="subject"
                            prop:value=move || form.subject().get()
                            on:input=move |ev| form.subject().set(event_target_value(&ev))
                            disabled=fields_disabled
                        />
                        <input
                            type="text"
                            placeholder="Version"
                            name="version"
                            prop:value=move || form.version().get()
                            on:input=move |ev| form.version().set(event_target_value(&ev))
                            disabled=fields_disabled
                        />

                        <select
                            name="category"
                            prop:value=move || {
                                form.category()
                                    .with(|c| c.as_ref().map(|c| c.id.to_string()).unwrap_or_default())
                            }
                            on:change=on_category_change
                        >
                            <option value="">"Select category"</option>
                            {move || {
                                categories
                                    .get()
                                    .into_iter()
                                    .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                                    .collect_view()
                            }}
                        </select>

                        <div class="upload-row">
                            <input type="file" multiple node_ref=file_input on:change=on_file_change />
                            <button
                                class="btn primary"
                                disabled=move || !upload_enabled()
                                on:click=on_upload
                            >
                                {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                            </button>
                        </div>
                    </div>

                    <div class="form-actions">
                        <Show
                            when=move || form.editing().get().is_some()
                            fallback=move || {
                                view! {
                                    <button class="btn primary" on:click=on_add>
                                        "＋ Add Document"
                                    </button>
                                }
                            }
                        >
                            <button class="btn primary" on:click=on_update>
                                "✓ Update"
                            </button>
                            <button class="btn" on:click=move |_| form.update(DocumentForm::reset)>
                                "Cancel"
                            </button>
                        </Show>
                    </div>

                    <UploadedFiles
                        names=Signal::derive(move || form.uploaded_names().get())
                        on_discard=on_discard
                        on_discard_all=on_discard_all
                    />
                </div>

                <DocumentTable documents=documents pager=pager on_view=on_view on_edit=on_edit />
                <DocumentModal viewer=viewer />
            </div>
        </div>
    }
}
