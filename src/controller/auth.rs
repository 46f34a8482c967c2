use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::{AuthSession, CsrfSession}},
    model::{api::ErrorDto, user::UserDto},
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from the Google callback for token exchange.
    pub code: String,
}

/// Start the Google OAuth2 login flow.
///
/// Generates the Google consent-screen URL, stores the CSRF state token in
/// the session, and redirects the browser there.
///
/// # Returns
/// - `307 Temporary Redirect` - To the Google consent screen
/// - `500 Internal Server Error` - Session storage failed
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the Google consent screen"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

/// Handle the Google OAuth2 callback.
///
/// Validates the CSRF state against the session, exchanges the authorization
/// code for an access token, resolves the Google profile to a stored user,
/// and establishes the session.
///
/// # Arguments
/// - `state` - Application state containing the OAuth2 and HTTP clients
/// - `session` - Session holding the CSRF token from login
/// - `params` - CSRF state and authorization code from Google
///
/// # Returns
/// - `200 OK` - Authenticated user
/// - `400 Bad Request` - CSRF state mismatch
/// - `500 Internal Server Error` - Token exchange or database error
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state token"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 200, description = "Successfully authenticated", body = UserDto),
        (status = 400, description = "CSRF validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.0.state).await?;

    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);
    let user = auth_service.callback(params.0.code).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log the current user out.
///
/// Clears the session, including the authenticated user id and any leftover
/// OAuth flow state.
///
/// # Returns
/// - `200 OK` - Session cleared
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully logged out")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::OK)
}

/// Get the currently authenticated user.
///
/// Resolves the session to its stored user record.
///
/// # Returns
/// - `200 OK` - The authenticated user
/// - `401 Unauthorized` - No user in session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Currently authenticated user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
