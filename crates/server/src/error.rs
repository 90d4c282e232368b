use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Airtable token not set")]
    TokenNotSet,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::TokenNotSet => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error: Airtable token not set",
            )
                .into_response(),
        }
    }
}
