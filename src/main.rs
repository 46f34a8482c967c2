//! Announcements backend.
//!
//! A backend service managing three resources: users, client apps, and
//! time-windowed announcements. Apps are referenced by slug from
//! announcements; an announcement is active for an app while the current
//! instant lies inside its `[start_date, end_date]` window. Authentication is
//! a thin wrapper around Google OAuth2.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! Supporting modules provide application infrastructure: `config` (environment
//! configuration), `state` (shared state), `startup` (database, session, and
//! client initialization), `router` (routes, Swagger UI, CORS), and `util`
//! (the date-ordering check).

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client();
    let oauth_client = startup::setup_oauth_client(&config)?;

    let app = router::router(&config.frontend_url)?
        .with_state(AppState::new(db, http_client, oauth_client))
        .layer(session);

    tracing::info!("Listening on {}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
