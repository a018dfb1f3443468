use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    InvalidCredentials,
    InvalidToken,
    UserNotFound,
    Internal,
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid email or password"),
            AppError::InvalidToken => (StatusCode::BAD_REQUEST, "Invalid token"),
            AppError::UserNotFound => (StatusCode::BAD_REQUEST, "User not found"),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Server error"),
        };

        let body = Json(ErrorResponse {
            message: message.to_string(),
        });

        (status, body).into_response()
    }
}

// 基础设施错误统一折叠为 Internal，细节只进日志
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", err);
        AppError::Internal
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        tracing::error!("Redis error: {}", err);
        AppError::Internal
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::error!("Token error: {}", err);
        AppError::Internal
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("Password verification error: {}", err);
        AppError::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn response_parts(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn invalid_credentials_maps_to_400_with_generic_message() {
        let (status, body) = response_parts(AppError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn invalid_token_maps_to_400() {
        let (status, body) = response_parts(AppError::InvalidToken).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid token");
    }

    #[tokio::test]
    async fn user_not_found_maps_to_400() {
        let (status, body) = response_parts(AppError::UserNotFound).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User not found");
    }

    #[tokio::test]
    async fn internal_maps_to_500_without_detail() {
        let (status, body) = response_parts(AppError::Internal).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Server error");
        assert!(body.get("detail").is_none());
    }
}
