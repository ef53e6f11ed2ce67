pub mod app;
pub mod auth_guard;
pub mod loading_spinner;
pub mod login_screen;
pub mod notification_bell;
pub mod register_screen;
pub mod role_redirect;

pub use app::App;
pub use auth_guard::AuthGuard;
pub use loading_spinner::LoadingSpinner;
pub use login_screen::LoginScreen;
pub use notification_bell::NotificationBell;
pub use register_screen::RegisterScreen;
pub use role_redirect::RoleBasedRedirect;
