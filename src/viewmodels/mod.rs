// ============================================================================
// VIEWMODELS - Lógica de UI pura: reciben estado, devuelven decisiones
// ============================================================================

pub mod access_guard_viewmodel;
pub mod notification_poll_viewmodel;
pub mod role_redirect_viewmodel;

pub use access_guard_viewmodel::{evaluate, DenyReason, GuardConstraints, GuardDecision};
pub use notification_poll_viewmodel::{plan_for_token, PollPlan, PollSubscription};
pub use role_redirect_viewmodel::{is_entry_path, signed_in_destination, RoleRedirectTracker};
