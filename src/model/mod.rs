//! Domain models, operation parameters, and wire DTOs.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Parameter types carry
//! operation inputs into the service layer; partial-update parameters hold an
//! `Option` per field so absent fields are left untouched.

pub mod announcement;
pub mod api;
pub mod app;
pub mod user;
