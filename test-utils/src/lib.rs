//! Announcements Test Utils
//!
//! Shared testing utilities for the announcements backend. Provides a builder
//! pattern for creating test contexts with in-memory SQLite databases and
//! customizable table schemas, plus data factories for users, apps, and
//! announcements.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_announcement_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_announcement_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
