//! AskRunner – convenience wrapper that takes a controller through one full
//! submission round: submit → ask the service → complete.
//!
//! Front ends that drive the two lifecycle events themselves (for instance
//! to repaint between them) can keep calling `SessionController::submit` and
//! `SessionController::complete` directly; the runner only packages the
//! common pairing so a caller cannot issue a request and forget its
//! completion.

use std::sync::Arc;

use crate::client::AskClient;
use crate::session::{SessionController, SessionState};

/// Runs complete submission rounds against any [`AskClient`].
#[derive(Clone)]
pub struct AskRunner {
    client: Arc<dyn AskClient>,
}

impl AskRunner {
    pub fn new(client: Arc<dyn AskClient>) -> Self {
        Self { client }
    }

    /// Submit the controller's current draft and wait for the outcome.
    ///
    /// When the controller refuses the submission (empty draft, request
    /// already in flight) no request is issued and the state is returned
    /// as-is. Otherwise the service is asked exactly once and the resulting
    /// terminal transition is applied before returning. There is no timeout:
    /// a service that never answers keeps the session in
    /// [`SessionState::Loading`] for as long as the call stays pending.
    pub async fn run<'a>(&self, controller: &'a mut SessionController) -> &'a SessionState {
        if let Some(request) = controller.submit() {
            let outcome = self.client.ask(request).await;
            controller.complete(outcome);
        }
        controller.state()
    }
}
