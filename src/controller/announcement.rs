use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::DebugParam,
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        announcement::{AnnouncementDto, CreateAnnouncementDto, UpdateAnnouncementDto},
        api::ErrorDto,
    },
    service::{announcement::AnnouncementService, app::AppService},
    state::AppState,
};

/// Tag for grouping announcement endpoints in OpenAPI documentation
pub static ANNOUNCEMENT_TAG: &str = "announcement";

/// Get all announcements in one visibility universe.
///
/// Returns every announcement whose debug flag matches the `debug` query
/// parameter. The debug and production universes are disjoint; there is no
/// combined query. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can list announcements
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `params` - Universe selection (`debug`, default false)
///
/// # Returns
/// - `200 OK` - List of announcements in the requested universe
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    params(DebugParam),
    responses(
        (status = 200, description = "Successfully retrieved announcements", body = Vec<AnnouncementDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_announcements(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<DebugParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let announcements = AnnouncementService::new(&state.db)
        .list(params.debug)
        .await?;

    let dtos: Vec<AnnouncementDto> = announcements.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new announcement.
///
/// Creates a time-windowed announcement targeting the given app slugs. The
/// start date must be strictly before the end date and every slug must belong
/// to a registered app; otherwise nothing is written. The authenticated admin
/// is recorded as the creator. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can create announcements
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Announcement creation data
///
/// # Returns
/// - `201 Created` - Successfully created announcement
/// - `400 Bad Request` - Ill-ordered date window or unknown app slug
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    request_body = CreateAnnouncementDto,
    responses(
        (status = 201, description = "Successfully created announcement", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = payload.into_params(Some(user.email));
    let announcement = AnnouncementService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(announcement.into_dto())))
}

/// Update an announcement.
///
/// Applies a partial update; absent fields are left untouched. When either
/// date is supplied, the resulting window is validated against the stored
/// value of the missing date before anything is written. Only accessible by
/// admins.
///
/// # Access Control
/// - `Admin` - Only admins can update announcements
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Announcement id to update
/// - `payload` - Fields to overwrite
///
/// # Returns
/// - `200 OK` - Successfully updated announcement
/// - `400 Bad Request` - Ill-ordered date window or unknown app slug
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No announcement with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Announcement id")
    ),
    request_body = UpdateAnnouncementDto,
    responses(
        (status = 200, description = "Successfully updated announcement", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let announcement = AnnouncementService::new(&state.db)
        .update(id, payload.into_params())
        .await?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

/// Delete an announcement.
///
/// Removes the announcement and returns the deleted record. Only accessible
/// by admins.
///
/// # Access Control
/// - `Admin` - Only admins can delete announcements
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Announcement id to delete
///
/// # Returns
/// - `200 OK` - Successfully deleted announcement
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No announcement with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Announcement id")
    ),
    responses(
        (status = 200, description = "Successfully deleted announcement", body = AnnouncementDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let announcement = AnnouncementService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

/// Get the announcements currently active for an app.
///
/// Returns the announcements targeting the given slug whose visibility window
/// contains the current instant, boundary-inclusive on both ends. Clients
/// poll this endpoint, so it requires no authentication and an unknown slug
/// yields an empty list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `slug` - App slug to query
/// - `params` - Universe selection (`debug`, default false)
///
/// # Returns
/// - `200 OK` - Currently active announcements for the slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/announcements/{slug}/active",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("slug" = String, Path, description = "App slug"),
        DebugParam
    ),
    responses(
        (status = 200, description = "Currently active announcements", body = Vec<AnnouncementDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_announcements(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<DebugParam>,
) -> Result<impl IntoResponse, AppError> {
    let announcements = AppService::new(&state.db)
        .active_announcements(&slug, params.debug)
        .await?;

    let dtos: Vec<AnnouncementDto> = announcements.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
