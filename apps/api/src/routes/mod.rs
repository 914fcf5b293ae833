pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::catalog::handlers as catalog;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/resumes",
            get(resumes::handle_list_resumes).post(resumes::handle_create_resume),
        )
        .route(
            "/api/resumes/:id",
            get(resumes::handle_get_resume)
                .put(resumes::handle_update_resume)
                .delete(resumes::handle_delete_resume),
        )
        .route("/api/resumes/:id/analyze", post(resumes::handle_analyze_resume))
        .route("/api/resumes/:id/export", get(resumes::handle_export_resume))
        // Mock auth
        .route("/api/auth/me", get(auth::handle_me))
        // Static content
        .route("/api/careers", get(catalog::handle_list_careers))
        .route("/api/careers/:id", get(catalog::handle_get_career))
        .route("/api/tracks/:id", get(catalog::handle_get_track))
        .with_state(state)
}
