use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the Sqlite database.
///
/// Sessions live in their own table in the same database, created here if it
/// does not exist yet. Sessions expire after seven days of inactivity.
///
/// # Arguments
/// - `db` - Connected database whose pool backs the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer ready to attach to the router
/// - `Err(AppError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Creates the HTTP client used for external API requests.
///
/// Redirects are disabled so a redirecting response from an external endpoint
/// cannot be used for SSRF.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Creates the OAuth2 client for the Google authentication flow.
///
/// # Arguments
/// - `config` - Application configuration with the Google client credentials
///
/// # Returns
/// - `Ok(OAuth2Client)` - Configured OAuth2 client
/// - `Err(AppError::ConfigErr)` - A configured URL could not be parsed
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = oauth2::basic::BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.google_auth_url.clone())
                .map_err(|_| ConfigError::InvalidUrl(config.google_auth_url.clone()))?,
        )
        .set_token_uri(
            TokenUrl::new(config.google_token_url.clone())
                .map_err(|_| ConfigError::InvalidUrl(config.google_token_url.clone()))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.google_redirect_url.clone())
                .map_err(|_| ConfigError::InvalidUrl(config.google_redirect_url.clone()))?,
        );

    Ok(client)
}
