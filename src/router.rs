use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        announcement::{
            create_announcement, delete_announcement, get_active_announcements,
            list_announcements, update_announcement,
        },
        app::{create_app, delete_app, list_apps, update_app},
        auth::{callback, get_user, login, logout},
        user::{create_user, delete_user, list_users, login_user, update_user},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// OpenAPI document covering every endpoint of the service.
#[derive(OpenApi)]
#[openapi(paths(
    crate::controller::announcement::list_announcements,
    crate::controller::announcement::create_announcement,
    crate::controller::announcement::update_announcement,
    crate::controller::announcement::delete_announcement,
    crate::controller::announcement::get_active_announcements,
    crate::controller::app::list_apps,
    crate::controller::app::create_app,
    crate::controller::app::update_app,
    crate::controller::app::delete_app,
    crate::controller::user::list_users,
    crate::controller::user::create_user,
    crate::controller::user::update_user,
    crate::controller::user::delete_user,
    crate::controller::user::login_user,
    crate::controller::auth::login,
    crate::controller::auth::callback,
    crate::controller::auth::logout,
    crate::controller::auth::get_user,
))]
struct ApiDoc;

/// Builds the application router.
///
/// Routes, Swagger UI at `/swagger-ui`, request tracing, and a CORS layer
/// restricted to the configured frontend origin. Session and state layers are
/// attached by the caller during startup.
///
/// # Arguments
/// - `frontend_url` - Origin allowed by CORS
///
/// # Returns
/// - `Ok(Router<AppState>)` - Configured router
/// - `Err(AppError::ConfigErr)` - The frontend URL is not a valid origin
pub fn router(frontend_url: &str) -> Result<Router<AppState>, AppError> {
    let origin = frontend_url
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidUrl(frontend_url.to_string()))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Ok(Router::new()
        .route(
            "/api/announcements",
            get(list_announcements).post(create_announcement),
        )
        .route(
            "/api/announcements/{id}",
            axum::routing::put(update_announcement).delete(delete_announcement),
        )
        .route(
            "/api/announcements/{slug}/active",
            get(get_active_announcements),
        )
        .route("/api/apps", get(list_apps).post(create_app))
        .route(
            "/api/apps/{id}",
            axum::routing::put(update_app).delete(delete_app),
        )
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            axum::routing::put(update_user).delete(delete_user),
        )
        .route("/api/users/login", post(login_user))
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
