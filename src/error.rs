use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;
pub type PublicResult<T> = std::result::Result<T, PublicError>;

/// Errors returned by the admin API as JSON bodies.
///
/// Storage errors surface the underlying driver message; the admin is the
/// only caller of this surface.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    #[error("Paste not found")]
    NotFound,
    #[error("Content is required")]
    MissingContent,
    #[error("Invalid credentials")]
    Unauthorized,
    #[error("{source}")]
    Database { source: sqlx::Error },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MissingContent => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let challenge = matches!(self, ApiError::Unauthorized);
        let mut response =
            (status_code, Json(json!({ "error": self.to_string() }))).into_response();
        if challenge {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"Admin Area\""),
            );
        }
        response
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(source: sqlx::Error) -> Self {
        match source {
            sqlx::Error::RowNotFound => ApiError::NotFound,
            _ => ApiError::Database { source },
        }
    }
}

/// Errors returned by the public read paths as plain text.
///
/// Unlike [`ApiError`], internals are logged but never leaked to the caller.
#[derive(Error, Debug)]
pub enum PublicError {
    #[error("Not found")]
    NotFound,
    #[error("Server error")]
    Internal {
        #[source]
        source: ApiError,
    },
}

impl IntoResponse for PublicError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            PublicError::NotFound => StatusCode::NOT_FOUND,
            PublicError::Internal { source } => {
                tracing::error!(error = %source, "public request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status_code, self.to_string()).into_response()
    }
}

impl From<ApiError> for PublicError {
    fn from(source: ApiError) -> Self {
        match source {
            ApiError::NotFound => PublicError::NotFound,
            _ => PublicError::Internal { source },
        }
    }
}
