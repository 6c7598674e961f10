//! Error Banner Component
//!
//! Single fixed slot for user-facing failures. Every error in the app —
//! generation or export — lands here; nothing is fatal and the interface
//! stays usable after any failure.

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn ErrorBanner(
    /// Message to display; the banner hides itself when `None`.
    message: Signal<Option<String>>,
    /// Callback when the user dismisses the error.
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="p-4 border rounded-lg bg-red-900/30 border-red-700/50">
                <div class="flex items-start justify-between gap-3">
                    <p class="text-red-400 text-center flex-1">
                        {move || message.get().unwrap_or_default()}
                    </p>
                    {on_dismiss
                        .map(|cb| {
                            view! {
                                <button
                                    class="text-red-300 hover:text-red-100 text-sm shrink-0"
                                    on:click=move |_: ev::MouseEvent| cb.run(())
                                >
                                    "Dismiss"
                                </button>
                            }
                        })}
                </div>
            </div>
        </Show>
    }
}
