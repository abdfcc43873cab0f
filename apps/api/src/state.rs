use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::models::session::InterviewSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Default: `GeminiClient`. Tests use stubs.
    pub llm: Arc<dyn TextGenerator>,
    /// The single interview session this process holds. One session at a time;
    /// the lock is never held across an await.
    pub session: Arc<Mutex<InterviewSession>>,
    pub config: Config,
}
