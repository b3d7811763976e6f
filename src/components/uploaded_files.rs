//! Uploaded Files Component
//!
//! Names of files already uploaded for the form, each discardable.

use leptos::prelude::*;

#[component]
pub fn UploadedFiles(
    #[prop(into)] names: Signal<Vec<String>>,
    /// Index of the file to drop
    #[prop(into)]
    on_discard: Callback<usize>,
    #[prop(into)] on_discard_all: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || names.with(|n| !n.is_empty())>
            <div class="uploaded-files">
                <div class="uploaded-list">
                    {move || {
                        names
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, name)| {
                                view! {
                                    <div class="uploaded-chip">
                                        <span>{name}</span>
                                        <button
                                            class="discard-btn"
                                            title="Discard"
                                            on:click=move |_| on_discard.run(index)
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <button class="discard-all-btn" on:click=move |_| on_discard_all.run(())>
                    "Discard All"
                </button>
            </div>
        </Show>
    }
}
