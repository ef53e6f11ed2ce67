pub mod auth;
pub mod notification;

pub use auth::{
    AuthTokens, ErrorBody, LoginRequest, LoginResponse, PersistedSession, ProfileUpdate,
    RegisterForm, RegisterRequest, RegisterResponse, Role, UnknownRole, User,
};
pub use notification::{
    BookingStatus, BookingSummary, Notification, NotificationKind, NotificationRecord,
};
