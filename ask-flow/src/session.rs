use tracing::{debug, info, warn};

use crate::answer::{Answer, AskRequest};
use crate::error::Result;
use crate::query::{PromptStrategy, Query};

/// Where the session stands with respect to the remote service. Exactly one
/// variant holds at any time; there is no such thing as "loading with a
/// stale answer".
#[derive(Debug, Clone)]
pub enum SessionState {
    /// Nothing submitted yet.
    Idle,
    /// One request is in flight. The only exit is the arrival of its
    /// response; there is no timeout and no cancellation.
    Loading,
    /// The last submission succeeded.
    Succeeded(Answer),
    /// The last submission failed; the payload is the user-visible message.
    Failed(String),
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn answer(&self) -> Option<&Answer> {
        match self {
            SessionState::Succeeded(answer) => Some(answer),
            _ => None,
        }
    }
}

/// Owns the draft [`Query`] and drives the session lifecycle:
/// compose → submit → await result → render → re-submit.
///
/// The controller is the single writer of all session state. Its two
/// lifecycle events are [`submit`](Self::submit), which yields the one
/// outbound request, and [`complete`](Self::complete), which applies the one
/// terminal transition for that request. Everything else is a draft edit and
/// never changes the [`SessionState`]: a prior answer or failure stays
/// visible while the user types the next question.
#[derive(Debug, Default)]
pub struct SessionController {
    query: Query,
    state: SessionState,
    conversation_id: Option<String>,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Token the service handed back with the last successful answer, if
    /// any. Stored, not interpreted.
    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    /// Replace the draft question text. Accepts any string, trims nothing.
    pub fn update_question_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    pub fn select_prompt_strategy(&mut self, strategy: PromptStrategy) {
        self.query.strategy = strategy;
    }

    pub fn toggle_memory(&mut self, use_memory: bool) {
        self.query.use_memory = use_memory;
    }

    /// Overwrite the draft with a canned example question. Never submits.
    pub fn apply_example(&mut self, question: &str) {
        self.query.text = question.to_string();
    }

    /// The submission event. Returns the single request to issue, or `None`
    /// when the draft is empty after trimming or a request is already in
    /// flight; both are silent no-ops that leave every field untouched.
    ///
    /// On success the state moves to [`SessionState::Loading`], dropping any
    /// prior answer or failure.
    pub fn submit(&mut self) -> Option<AskRequest> {
        if self.state.is_loading() {
            debug!("submit ignored: a request is already in flight");
            return None;
        }
        if !self.query.is_submittable() {
            debug!("submit ignored: empty question");
            return None;
        }

        let request = AskRequest {
            question: self.query.trimmed_text().to_string(),
            prompt_type: self.query.strategy,
            use_memory: self.query.use_memory,
        };

        info!(
            prompt_type = request.prompt_type.as_str(),
            use_memory = request.use_memory,
            "submitting question"
        );
        self.state = SessionState::Loading;
        Some(request)
    }

    /// The response event for the request issued by the last [`submit`].
    /// Applies exactly one terminal transition. A completion with no request
    /// in flight corresponds to nothing and is ignored.
    pub fn complete(&mut self, outcome: Result<Answer>) {
        if !self.state.is_loading() {
            warn!("completion event ignored: no request in flight");
            return;
        }

        self.state = match outcome {
            Ok(answer) => {
                if let Some(id) = &answer.conversation_id {
                    self.conversation_id = Some(id.clone());
                }
                info!(sources = answer.sources.len(), "answer received");
                SessionState::Succeeded(answer)
            }
            Err(error) => {
                let message = error.user_message();
                warn!(%error, "submission failed: {message}");
                SessionState::Failed(message)
            }
        };
    }
}
