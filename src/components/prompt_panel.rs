//! Prompt Panel Component
//!
//! Prompt textarea, target-language selector and the generate action.

use leptos::ev;
use leptos::prelude::*;

use crate::services::studio_state::{use_studio_state, LANGUAGE_CHOICES};

#[component]
pub fn PromptPanel(
    /// Invoked when the user submits the current prompt.
    on_generate: Callback<()>,
) -> impl IntoView {
    let state = use_studio_state();

    let is_loading = Signal::derive(move || state.request.get().is_in_flight());
    // The client performs no prompt validation; the disabled control is the
    // only guard against empty submissions.
    let can_submit = Signal::derive(move || {
        !state.request.get().is_in_flight() && !state.prompt.get().trim().is_empty()
    });

    let on_prompt_input = move |evt: ev::Event| {
        state.prompt.set(event_target_value(&evt));
    };

    let on_language_change = move |evt: ev::Event| {
        state.language.set(event_target_value(&evt));
    };

    let handle_generate = move |_: ev::MouseEvent| {
        on_generate.run(());
    };

    view! {
        <section class="bg-zinc-800 p-6 rounded-xl shadow-lg">
            <div class="flex items-center justify-between mb-3">
                <h2 class="text-2xl font-semibold text-white">"Enter Your Design Prompt"</h2>
                <select
                    class="bg-zinc-700 text-white rounded-lg px-3 py-2 border border-zinc-600 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    prop:value=move || state.language.get()
                    on:change=on_language_change
                    disabled=move || is_loading.get()
                >
                    {LANGUAGE_CHOICES
                        .iter()
                        .map(|&(value, label)| {
                            view! {
                                <option value=value selected=move || state.language.get() == value>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <textarea
                rows=4
                prop:value=move || state.prompt.get()
                on:input=on_prompt_input
                disabled=move || is_loading.get()
                placeholder="e.g., Modern portfolio with 3 sections and contact form..."
                class="w-full bg-zinc-700 text-white rounded-lg p-4 border border-zinc-600 placeholder-zinc-400 focus:outline-none focus:ring-2 focus:ring-blue-500 transition"
            ></textarea>
            <button
                on:click=handle_generate
                disabled=move || !can_submit.get()
                class="mt-4 w-full bg-blue-600 hover:bg-blue-700 disabled:opacity-50 py-3 rounded-lg font-bold text-white transition"
            >
                {move || {
                    if is_loading.get() {
                        view! {
                            <span class="flex justify-center items-center gap-2 animate-pulse">
                                "Generating..."
                            </span>
                        }
                            .into_any()
                    } else {
                        view! { <span>"Generate Design"</span> }.into_any()
                    }
                }}
            </button>
        </section>
    }
}
