use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;

use crate::errors::AppError;
use crate::models::user::MockUser;
use crate::state::AppState;

/// GET /api/auth/me
///
/// 401 without a session cookie, 404 when the cookie names no known user.
pub async fn handle_me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<MockUser>, AppError> {
    let token = jar
        .get(&state.config.auth_cookie_name)
        .map(|c| c.value().trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(AppError::Unauthorized)?;

    let user = state
        .sessions
        .find_user(&token)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}
