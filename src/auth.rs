use axum::extract::State;
use axum::headers::authorization::Basic;
use axum::headers::{Authorization, HeaderMapExt};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::config::Config;
use crate::error::ApiError;

/// Middleware guarding the admin surface with HTTP basic auth.
///
/// Credentials are checked statelessly on every request against the single
/// shared user/password pair from [`Config`]. Rejections answer 401 with a
/// `WWW-Authenticate` challenge so browsers prompt for credentials.
pub async fn require_auth<B>(
    State(config): State<Config>,
    request: Request<B>,
    next: Next<B>,
) -> Result<Response, ApiError> {
    match request.headers().typed_get::<Authorization<Basic>>() {
        Some(credentials)
            if credentials.username() == config.auth_user
                && credentials.password() == config.auth_pass =>
        {
            Ok(next.run(request).await)
        }
        _ => {
            tracing::debug!("missing or invalid admin credentials");
            Err(ApiError::Unauthorized)
        }
    }
}
