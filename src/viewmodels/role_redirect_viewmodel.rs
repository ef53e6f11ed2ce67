// ============================================================================
// ROLE REDIRECT VIEWMODEL - Redirección post-login según rol
// ============================================================================
// Solo actúa una vez por transición a "autenticado" y solo si el usuario está
// en la landing o en una página /auth/*. Nunca secuestra navegación interna.
// ============================================================================

use crate::services::permission_service::default_route_for;
use crate::stores::AuthStore;
use crate::utils::constants::{AUTH_ROUTE_PREFIX, LANDING_ROUTE};

/// ¿Es una página pública desde la que se debe redirigir tras autenticarse?
pub fn is_entry_path(path: &str) -> bool {
    path == LANDING_ROUTE || path.starts_with(AUTH_ROUTE_PREFIX)
}

/// Destino para un usuario ya autenticado que abre una página /auth/*.
/// A diferencia del tracker, no depende de haber visto la transición.
pub fn signed_in_destination(store: &AuthStore) -> Option<&'static str> {
    if store.is_loading {
        return None;
    }
    store.current_user().map(|user| default_route_for(user.role))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleRedirectTracker {
    /// Id del usuario de la última sesión autenticada observada
    observed_user: Option<u64>,
}

impl RoleRedirectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Llamar en cada cambio de sesión. Devuelve la ruta a la que navegar, si procede
    pub fn observe(&mut self, store: &AuthStore, current_path: &str) -> Option<String> {
        if store.is_loading {
            return None;
        }

        let user = store.current_user();
        let user_id = user.map(|user| user.id);
        if user_id == self.observed_user {
            return None;
        }
        self.observed_user = user_id;

        let user = user?;
        if !is_entry_path(current_path) {
            return None;
        }

        let target = default_route_for(user.role);
        if target == current_path {
            return None;
        }

        log::info!("🧭 [REDIRECT] {} ({}) -> {}", user.email, user.role, target);
        Some(target.to_string())
    }
}
