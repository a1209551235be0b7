use thiserror::Error;

/// Shown when a failure carries no structured message the user could act on.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error al procesar la pregunta";

#[derive(Debug, Error)]
pub enum AskError {
    /// The service answered with a non-2xx status. `detail` is the
    /// server-supplied explanation when the body carried one.
    #[error("ask request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// The request never completed (connection refused, DNS, timeout at the
    /// socket level, ...).
    #[error("ask request failed in transit: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service reported success but the body does not match the answer
    /// schema.
    #[error("malformed answer payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AskError {
    /// The message rendered to the user when this error terminates a
    /// submission. Server detail wins, then a synthesized status line,
    /// then the generic fallback for errors with no structured message.
    pub fn user_message(&self) -> String {
        match self {
            AskError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            AskError::Rejected { status, .. } => format!("Error {status}"),
            AskError::Transport(_) | AskError::Decode(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AskError>;
