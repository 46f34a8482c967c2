pub mod prelude;

pub mod announcement;
pub mod announcement_app;
pub mod app;
pub mod user;
