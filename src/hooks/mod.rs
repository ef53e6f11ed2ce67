pub mod auth_context;
pub mod use_auth;
pub mod use_location;
pub mod use_notifications;

pub use auth_context::{use_auth_store, AuthContext, AuthContextProvider};
pub use use_auth::{use_auth, UseAuthHandle};
pub use use_location::use_current_path;
pub use use_notifications::{use_notifications, NotificationContext, NotificationContextProvider, UseNotificationsHandle};
