//! Application Shell
//!
//! Owns orchestration: the shared studio state, the generation round-trip and
//! the export action. Child components read and write the state through
//! context; no state lives anywhere else.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::code_editor::CodeEditor;
use crate::components::error_banner::ErrorBanner;
use crate::components::preview_pane::PreviewPane;
use crate::components::prompt_panel::PromptPanel;
use crate::services::export;
use crate::services::generation;
use crate::services::studio_state::{provide_studio_state, use_studio_state};

#[component]
pub fn App() -> impl IntoView {
    provide_studio_state();
    let state = use_studio_state();

    let on_generate = Callback::new(move |_: ()| {
        let prompt = state.prompt.get_untracked();
        if prompt.trim().is_empty() {
            return;
        }
        let language = state.language.get_untracked();
        // Clears error and content, so a failure shows an empty preview
        // rather than a stale one.
        let seq = state.begin_request();
        spawn_local(async move {
            let result = generation::generate(&prompt, &language).await;
            state.finish_request(seq, result);
        });
    });

    let can_export = Signal::derive(move || !state.code.get().trim().is_empty());

    let on_export = move |_: ev::MouseEvent| {
        if let Err(err) = export::export(&state.code.get_untracked()) {
            log::warn!("export failed: {}", err);
            state.error.set(Some(err.to_string()));
        }
    };

    let error_message = Signal::derive(move || state.error.get());
    let dismiss_error = Callback::new(move |_: ()| state.error.set(None));

    view! {
        <div class="min-h-screen bg-gradient-to-br from-zinc-900 to-black text-white p-6">
            <div class="max-w-5xl mx-auto space-y-10">
                <header class="flex justify-between items-center">
                    <h1 class="text-4xl font-bold text-blue-500 tracking-tight">"AI Web Designer"</h1>
                    <button
                        on:click=on_export
                        disabled=move || !can_export.get()
                        class="flex items-center gap-2 bg-green-600 hover:bg-green-700 disabled:opacity-50 transition px-4 py-2 rounded-lg shadow"
                    >
                        "Download ZIP"
                    </button>
                </header>

                <PromptPanel on_generate=on_generate />

                <ErrorBanner message=error_message on_dismiss=dismiss_error />

                <PreviewPane />

                <CodeEditor />
            </div>
        </div>
    }
}
