use axum::extract::{Json, State};

use crate::{AppState, error::AppError};

use super::model::{LoginRequest, LoginResponse, LogoutRequest, LogoutResponse};

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (token, user_id) = state.sessions.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse { token, user_id }))
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<AppState>,
    Json(req): Json<LogoutRequest>,
) -> Result<Json<LogoutResponse>, AppError> {
    state.sessions.logout(&req.email, &req.token).await?;

    Ok(Json(LogoutResponse {
        message: "bye bye".to_string(),
    }))
}
