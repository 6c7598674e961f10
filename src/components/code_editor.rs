//! Code Editor Component
//!
//! Editable buffer for the generated markup. Edits write straight into the
//! shared content signal, so the preview re-renders on every keystroke and
//! the exporter always sees the latest value.

use leptos::ev;
use leptos::prelude::*;

use crate::services::studio_state::use_studio_state;

#[component]
pub fn CodeEditor() -> impl IntoView {
    let state = use_studio_state();

    let on_input = move |evt: ev::Event| {
        state.code.set(event_target_value(&evt));
    };

    view! {
        <section>
            <h2 class="text-2xl font-semibold mb-3 text-green-400 text-center">
                "Code Output (Editable)"
            </h2>
            <textarea
                prop:value=move || state.code.get()
                on:input=on_input
                class="w-full h-[300px] bg-zinc-900 text-green-400 p-4 rounded-lg border border-zinc-700 font-mono text-sm resize-y focus:outline-none focus:ring-2 focus:ring-green-500 transition"
            ></textarea>
        </section>
    }
}
