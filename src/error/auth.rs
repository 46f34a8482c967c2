use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is stored in the session.
    ///
    /// The request reached a protected endpoint without a prior login.
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// The user record was deleted after the session was established.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} in session but not in database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the required permission.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The authorization code could not be exchanged for an access token.
    ///
    /// Results in a 500 Internal Server Error with a generic message.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),
}

impl<RE, TE> From<oauth2::RequestTokenError<RE, TE>> for AuthError
where
    RE: std::error::Error + 'static,
    TE: oauth2::ErrorResponse + 'static,
{
    fn from(err: oauth2::RequestTokenError<RE, TE>) -> Self {
        Self::TokenExchange(err.to_string())
    }
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to status codes with client-safe messages:
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` → 400 Bad Request
/// - `TokenExchange` → 500 Internal Server Error
///
/// Full details are logged server-side while client-facing messages stay
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("User {} denied access: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchange(detail) => {
                tracing::error!("OAuth token exchange failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
