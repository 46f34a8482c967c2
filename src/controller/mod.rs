//! HTTP request handlers.
//!
//! Controllers validate access through the `AuthGuard`, convert request DTOs
//! into service parameters, call the service layer, and convert the returned
//! domain models back into response DTOs. Every announcement, app, and user
//! mutation is admin-gated; the active-announcements endpoint and the auth
//! flow are public.

pub mod announcement;
pub mod app;
pub mod auth;
pub mod user;

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameter selecting the announcement visibility universe.
///
/// The debug and production universes are disjoint; omitting the parameter
/// selects production.
#[derive(Deserialize, IntoParams)]
pub struct DebugParam {
    /// Whether to query the debug universe (default: false).
    #[serde(default)]
    pub debug: bool,
}
