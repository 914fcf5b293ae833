use axum::{extract::Path, Json};
use serde::Serialize;

use crate::catalog::careers::{find_career, Career, CareerSummary, CAREERS};
use crate::catalog::tracks::{find_track, LearningTrack};
use crate::errors::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackResponse {
    #[serde(flatten)]
    pub track: &'static LearningTrack,
    pub total_weeks: u32,
}

/// GET /api/careers
pub async fn handle_list_careers() -> Json<Vec<CareerSummary>> {
    Json(CAREERS.iter().map(CareerSummary::from).collect())
}

/// GET /api/careers/:id
pub async fn handle_get_career(Path(id): Path<String>) -> Result<Json<&'static Career>, AppError> {
    find_career(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))
}

/// GET /api/tracks/:id
pub async fn handle_get_track(Path(id): Path<String>) -> Result<Json<TrackResponse>, AppError> {
    let track =
        find_track(&id).ok_or_else(|| AppError::NotFound(format!("Track {id} not found")))?;
    Ok(Json(TrackResponse {
        track,
        total_weeks: track.total_weeks(),
    }))
}
