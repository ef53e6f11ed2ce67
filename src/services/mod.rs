pub mod auth_service;
pub mod native_alerts;
pub mod navigation;
pub mod notification_service;
pub mod permission_service;

pub use auth_service::*;
pub use native_alerts::{
    ensure_permission, surface_alerts, AlertPermission, BrowserAlertSink, NativeAlertSink,
    NoopAlertSink, SharedAlertSink,
};
pub use navigation::{current_path, navigate};
pub use notification_service::{fetch_notifications, notifications_from_bookings, parse_push_batch};
pub use permission_service::{
    can_access_resource, can_access_resource_str, default_route_for, default_route_for_str,
    has_permission, resources_for,
};
