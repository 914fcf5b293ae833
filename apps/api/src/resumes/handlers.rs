//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumePayload};
use crate::resumes::export::render_resume_to_md;
use crate::resumes::validation::validate_payload;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeWriteResponse {
    pub message: String,
    pub resume: Resume,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub success: bool,
    pub resumes: Vec<Resume>,
}

#[derive(Debug, Serialize)]
pub struct ResumeDetailResponse {
    pub success: bool,
    pub resume: Resume,
}

/// Ids that are not UUIDs (such as client-side temporary ids) were never
/// persisted, so they resolve to 404 like any other unknown id.
fn parse_resume_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| not_found(raw))
}

fn not_found(id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("Resume {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ResumePayload>, AppError>,
) -> Result<(StatusCode, Json<ResumeWriteResponse>), AppError> {
    let draft = validate_payload(payload)?;
    let resume = state.resumes.create(draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResumeWriteResponse {
            message: "Resume created successfully".to_string(),
            resume,
        }),
    ))
}

/// GET /api/resumes?userId=
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ResumeListResponse>, AppError> {
    // `?userId=` with no value means no filter
    let user_id = params.user_id.as_deref().filter(|u| !u.trim().is_empty());
    let resumes = state.resumes.list(user_id).await?;
    Ok(Json(ResumeListResponse {
        success: true,
        resumes,
    }))
}

/// GET /api/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeDetailResponse>, AppError> {
    let resume_id = parse_resume_id(&id)?;
    let resume = state
        .resumes
        .get(resume_id)
        .await?
        .ok_or_else(|| not_found(resume_id))?;

    Ok(Json(ResumeDetailResponse {
        success: true,
        resume,
    }))
}

/// PUT /api/resumes/:id
///
/// Whole-object save from the editor: every content field is replaced.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<ResumePayload>, AppError>,
) -> Result<Json<ResumeWriteResponse>, AppError> {
    let resume_id = parse_resume_id(&id)?;
    let draft = validate_payload(payload)?;
    let resume = state
        .resumes
        .update(resume_id, draft)
        .await?
        .ok_or_else(|| not_found(resume_id))?;

    Ok(Json(ResumeWriteResponse {
        message: "Resume updated successfully".to_string(),
        resume,
    }))
}

/// DELETE /api/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let resume_id = parse_resume_id(&id)?;
    if !state.resumes.delete(resume_id).await? {
        return Err(not_found(resume_id));
    }
    info!("Deleted resume {resume_id}");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/resumes/:id/analyze
///
/// Runs the configured scorer and stores its annotations on the record.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeDetailResponse>, AppError> {
    let resume_id = parse_resume_id(&id)?;
    let resume = state
        .resumes
        .get(resume_id)
        .await?
        .ok_or_else(|| not_found(resume_id))?;

    let analysis = state.scorer.analyze(&resume).await?;
    info!("Scored resume {resume_id}: {}", analysis.score);

    let resume = state
        .resumes
        .record_analysis(resume_id, &analysis)
        .await?
        .ok_or_else(|| not_found(resume_id))?;

    Ok(Json(ResumeDetailResponse {
        success: true,
        resume,
    }))
}

/// GET /api/resumes/:id/export
pub async fn handle_export_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resume_id = parse_resume_id(&id)?;
    let resume = state
        .resumes
        .get(resume_id)
        .await?
        .ok_or_else(|| not_found(resume_id))?;

    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        render_resume_to_md(&resume),
    ))
}
