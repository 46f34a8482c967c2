use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::ErrorDto,
        app::{AppDto, CreateAppDto, UpdateAppDto},
    },
    service::app::AppService,
    state::AppState,
};

/// Tag for grouping app endpoints in OpenAPI documentation
pub static APP_TAG: &str = "app";

/// Get all registered apps.
///
/// Returns every app in the registry. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can list apps
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - List of all apps
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/apps",
    tag = APP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved apps", body = Vec<AppDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_apps(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let apps = AppService::new(&state.db).list().await?;

    let dtos: Vec<AppDto> = apps.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Register a new app.
///
/// Creates an app with a name and a unique slug. The slug is the stable
/// identifier announcements use to target the app. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can register apps
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - App creation data
///
/// # Returns
/// - `201 Created` - Successfully registered app
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `409 Conflict` - An app with that slug already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/apps",
    tag = APP_TAG,
    request_body = CreateAppDto,
    responses(
        (status = 201, description = "Successfully registered app", body = AppDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Slug already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_app(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAppDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let app = AppService::new(&state.db)
        .create(payload.into_params())
        .await?;

    Ok((StatusCode::CREATED, Json(app.into_dto())))
}

/// Update an app.
///
/// Applies a partial update; absent fields are left untouched. Changing the
/// slug to one held by a different app fails. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can update apps
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - App id to update
/// - `payload` - Fields to overwrite
///
/// # Returns
/// - `200 OK` - Successfully updated app
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No app with that id
/// - `409 Conflict` - Another app already has the new slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/apps/{id}",
    tag = APP_TAG,
    params(
        ("id" = i32, Path, description = "App id")
    ),
    request_body = UpdateAppDto,
    responses(
        (status = 200, description = "Successfully updated app", body = AppDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "App not found", body = ErrorDto),
        (status = 409, description = "Slug already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_app(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAppDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let app = AppService::new(&state.db)
        .update(id, payload.into_params())
        .await?;

    Ok((StatusCode::OK, Json(app.into_dto())))
}

/// Delete an app.
///
/// Removes the app and returns the deleted record. Announcements that
/// targeted its slug keep their slug rows; the stale slug simply stops
/// matching any registered app. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can delete apps
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - App id to delete
///
/// # Returns
/// - `200 OK` - Successfully deleted app
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No app with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/apps/{id}",
    tag = APP_TAG,
    params(
        ("id" = i32, Path, description = "App id")
    ),
    responses(
        (status = 200, description = "Successfully deleted app", body = AppDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "App not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_app(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let app = AppService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(app.into_dto())))
}
