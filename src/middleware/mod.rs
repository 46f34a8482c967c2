//! Request processing and authentication guards.
//!
//! `auth` provides the `AuthGuard` used by controllers to resolve the session
//! user and enforce permissions; `session` wraps the raw session in typed
//! per-concern interfaces.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
