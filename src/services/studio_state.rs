//! Studio State Service
//!
//! Global state record for the prompt → generate → preview → export pipeline.
//! One content signal is the single source of truth: the preview, the editor
//! and the exporter all read the same value.

use leptos::prelude::*;

use crate::services::generation::GenerationError;

/// Lifecycle of the current generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }
}

/// Target languages the generation service understands. First entry is the
/// service-side default. Pairs of (wire value, display label).
pub const LANGUAGE_CHOICES: &[(&str, &str)] = &[
    ("html", "HTML / CSS / JS"),
    ("react", "React"),
    ("nextjs", "Next.js"),
    ("python", "Python (Flask)"),
    ("ruby", "Ruby on Rails"),
    ("typescript", "TypeScript React"),
];

#[derive(Clone, Copy)]
pub struct StudioState {
    pub prompt: RwSignal<String>,
    pub language: RwSignal<String>,
    /// Generated markup / edited buffer. Replaced wholesale on generation
    /// success, mutated incrementally on edit, never merged.
    pub code: RwSignal<String>,
    pub request: RwSignal<RequestState>,
    pub error: RwSignal<Option<String>>,
    /// Sequence number of the latest dispatched generation request.
    /// Completions carrying an older number are discarded.
    request_seq: RwSignal<u64>,
}

impl StudioState {
    pub fn new() -> Self {
        Self {
            prompt: RwSignal::new(String::new()),
            language: RwSignal::new("html".to_string()),
            code: RwSignal::new(String::new()),
            request: RwSignal::new(RequestState::Idle),
            error: RwSignal::new(None),
            request_seq: RwSignal::new(0),
        }
    }

    /// Marks a new submission: clears the error and the previous content, goes
    /// in-flight and returns the sequence number the completion must present.
    /// Content is cleared here, not at completion, so a failure surfaces as an
    /// empty preview rather than a stale one.
    pub fn begin_request(&self) -> u64 {
        let seq = self.request_seq.get_untracked() + 1;
        self.request_seq.set(seq);
        self.error.set(None);
        self.code.set(String::new());
        self.request.set(RequestState::InFlight);
        seq
    }

    /// Applies a completed generation result, unless a newer request was
    /// dispatched after `seq`.
    pub fn finish_request(&self, seq: u64, result: Result<String, GenerationError>) {
        if self.request_seq.get_untracked() != seq {
            log::warn!("discarding stale generation response (seq {})", seq);
            return;
        }
        match result {
            Ok(code) => {
                self.code.set(code);
                self.request.set(RequestState::Succeeded);
            }
            Err(err) => {
                let message = err.to_string();
                self.error.set(Some(message.clone()));
                self.request.set(RequestState::Failed(message));
            }
        }
    }
}

impl Default for StudioState {
    fn default() -> Self {
        Self::new()
    }
}

// Global accessor helpers
pub fn provide_studio_state() {
    provide_context(StudioState::new());
}

pub fn use_studio_state() -> StudioState {
    expect_context::<StudioState>()
}
