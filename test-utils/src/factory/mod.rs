//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories generate unique values from a shared counter so tests
//! never collide on unique columns (user emails, app slugs).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let app = factory::app::create_app(&db).await?;
//!
//!     // Customize through the builder
//!     let announcement = factory::announcement::AnnouncementFactory::new(&db)
//!         .apps(vec![app.slug.clone()])
//!         .is_debug(true)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod announcement;
pub mod app;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use announcement::create_announcement;
pub use app::{create_app, create_app_with_slug};
pub use user::{create_user, create_user_with_email};
