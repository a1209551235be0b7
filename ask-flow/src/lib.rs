pub mod answer;
pub mod client;
pub mod display;
pub mod error;
pub mod query;
pub mod runner;
pub mod session;

// Re-export commonly used types
pub use answer::{Answer, AskRequest, Source};
pub use client::{AskClient, DEFAULT_BASE_URL, HttpAskClient};
pub use display::{page_range, source_label};
pub use error::{AskError, GENERIC_FAILURE_MESSAGE, Result};
pub use query::{PromptStrategy, Query};
pub use runner::AskRunner;
pub use session::{SessionController, SessionState};
