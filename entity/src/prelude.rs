pub use super::announcement::Entity as Announcement;
pub use super::announcement_app::Entity as AnnouncementApp;
pub use super::app::Entity as App;
pub use super::user::Entity as User;
