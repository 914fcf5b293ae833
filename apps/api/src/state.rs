use std::sync::Arc;

use crate::auth::session::SessionStore;
use crate::config::Config;
use crate::resumes::scoring::ResumeScorer;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres in production, in-memory when no `DATABASE_URL` is configured.
    pub resumes: Arc<dyn ResumeStore>,
    pub sessions: Arc<dyn SessionStore>,
    /// Pluggable resume scorer. Default: HeuristicResumeScorer.
    pub scorer: Arc<dyn ResumeScorer>,
    pub config: Config,
}
