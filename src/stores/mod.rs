pub mod auth_store;
pub mod notification_store;

pub use auth_store::{AuthAction, AuthStore};
pub use notification_store::{badge_label, NotificationAction, NotificationStore};
