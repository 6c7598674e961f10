//! Live Preview Component
//!
//! Renders the current markup inside a sandboxed iframe. The frame document
//! is fully replaced on every buffer change; the sandbox is the only barrier
//! between generated scripts and the host page, no sanitization happens.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::studio_state::use_studio_state;

const PREVIEW_FRAME_ID: &str = "live-preview-frame";

/// Markup shown while there is no content to render.
pub const EMPTY_PREVIEW_MARKUP: &str =
    "<h2 style='color:#999; text-align:center;'>Preview will appear here</h2>";

/// Document to load into the frame for a given buffer value. Empty and
/// whitespace-only buffers get the neutral placeholder.
pub fn preview_document(content: &str) -> &str {
    if content.trim().is_empty() {
        EMPTY_PREVIEW_MARKUP
    } else {
        content
    }
}

#[component]
pub fn PreviewPane() -> impl IntoView {
    let state = use_studio_state();

    // Full replace-and-reload of the frame document on every buffer change.
    Effect::new(move |_| {
        let code = state.code.get();
        let markup = preview_document(&code);
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(frame) = document
                .get_element_by_id(PREVIEW_FRAME_ID)
                .and_then(|el| el.dyn_into::<web_sys::HtmlIFrameElement>().ok())
            {
                frame.set_srcdoc(markup);
            }
        }
    });

    view! {
        <section>
            <h2 class="text-2xl font-semibold mb-3 text-blue-400 text-center">"Live Preview"</h2>
            // allow-scripts + allow-same-origin: embedded scripts run, but the
            // frame cannot reach the host document, storage or parent window.
            <iframe
                id=PREVIEW_FRAME_ID
                title="Live Preview"
                sandbox="allow-scripts allow-same-origin"
                class="w-full h-[400px] bg-white border border-zinc-700 rounded-lg shadow-lg"
            ></iframe>
        </section>
    }
}
