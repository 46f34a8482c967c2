//! Google OAuth2 authentication service.
//!
//! This module provides the `AuthService` for the Google OAuth2 login flow.
//! It generates authorization URLs with CSRF protection, exchanges callback
//! codes for access tokens, fetches the Google userinfo profile, and resolves
//! the profile to a stored user through the user service.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::user::UserService,
    state::OAuth2Client,
};

/// Google userinfo endpoint for fetching the authenticated user's profile.
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Profile information returned from Google's userinfo endpoint.
#[derive(Debug, Deserialize)]
pub struct GoogleUser {
    /// Verified email address of the Google account.
    pub email: String,
    /// Display name of the Google account.
    pub name: String,
    /// Profile picture URL, empty when the account has none.
    #[serde(default)]
    pub picture: String,
}

/// Service for Google OAuth2 authentication.
///
/// Acts as the orchestration layer between the Google OAuth2 endpoints, the
/// HTTP client, and the user service.
pub struct AuthService<'a> {
    /// Database connection for user operations.
    pub db: &'a DatabaseConnection,
    /// HTTP client for Google API requests.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client for the Google authentication flow.
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - Reference to the HTTP client for Google API requests
    /// - `oauth_client` - Reference to the configured OAuth2 client
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates a Google OAuth2 login URL with CSRF protection.
    ///
    /// Creates an authorization URL that redirects users to Google's consent
    /// screen, requesting the profile and email scopes. Returns both the URL
    /// and the CSRF token for callback validation.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Handles the OAuth2 callback and authenticates the user.
    ///
    /// Exchanges the authorization code for an access token, fetches the
    /// user's Google profile, and resolves it to a stored user. First-time
    /// logins create the record; returning logins refresh the name and
    /// profile image. CSRF state validation happens in the controller before
    /// this is called.
    ///
    /// # Arguments
    /// - `authorization_code` - OAuth2 authorization code from the Google callback
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with refreshed profile
    /// - `Err(AppError::AuthErr)` - OAuth2 token exchange failed
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch the Google profile
    /// - `Err(AppError::DbErr)` - Database error during user upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let google_user = self.fetch_google_user(&token).await?;

        let user_service = UserService::new(self.db);
        let user = user_service
            .login(&google_user.email, &google_user.name, &google_user.picture)
            .await?;

        tracing::info!("User {} logged in", user.email);

        Ok(user)
    }

    /// Retrieves the authenticated user's Google profile using the provided access token.
    async fn fetch_google_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<GoogleUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(GOOGLE_USERINFO_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<GoogleUser>()
            .await?;

        Ok(user_info)
    }
}
