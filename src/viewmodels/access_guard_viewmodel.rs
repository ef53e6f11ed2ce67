// ============================================================================
// ACCESS GUARD VIEWMODEL - Decisión de acceso para un subárbol protegido
// ============================================================================
// Una sola decisión por snapshot del AuthStore. El componente la usa para
// (a) no renderizar los hijos y (b) programar la navegación, así nunca hay un
// frame con contenido no autorizado visible.
// ============================================================================

use crate::models::{Role, User};
use crate::services::permission_service::{can_access_resource, has_permission};
use crate::stores::AuthStore;
use crate::utils::constants::{LOGIN_ROUTE, UNAUTHORIZED_ROUTE};

/// Restricciones de un guard; todas las presentes deben cumplirse
#[derive(Debug, Clone, PartialEq)]
pub struct GuardConstraints {
    pub require_auth: bool,
    pub allowed_roles: Option<Vec<String>>,
    pub resource: Option<String>,
}

impl Default for GuardConstraints {
    fn default() -> Self {
        Self {
            require_auth: true,
            allowed_roles: None,
            resource: None,
        }
    }
}

impl GuardConstraints {
    pub fn public() -> Self {
        Self {
            require_auth: false,
            ..Self::default()
        }
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    fn has_role_constraints(&self) -> bool {
        self.allowed_roles.is_some() || self.resource.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
    RoleNotAllowed,
    ResourceForbidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hidratando / login en vuelo: solo indicador de carga, sin redirección
    Loading,
    Render,
    /// No renderizar nada y navegar a `to`
    Redirect { to: String, reason: DenyReason },
}

impl GuardDecision {
    fn deny(reason: DenyReason) -> Self {
        let to = match reason {
            DenyReason::Unauthenticated => LOGIN_ROUTE,
            DenyReason::RoleNotAllowed | DenyReason::ResourceForbidden => UNAUTHORIZED_ROUTE,
        };
        GuardDecision::Redirect {
            to: to.to_string(),
            reason,
        }
    }

    pub fn renders_children(&self) -> bool {
        matches!(self, GuardDecision::Render)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GuardDecision::Loading)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardDecision::Redirect { to, .. } => Some(to),
            _ => None,
        }
    }
}

/// Evalúa las restricciones contra el estado actual de la sesión.
///
/// Sin usuario y con roles o recurso exigidos se redirige a login aunque
/// `require_auth` sea false: un rol no se puede cumplir de forma anónima, así
/// que no se manda a "/unauthorized" como un fallo de rol de un usuario real.
pub fn evaluate(store: &AuthStore, constraints: &GuardConstraints) -> GuardDecision {
    if store.is_loading {
        return GuardDecision::Loading;
    }

    // Autenticado sin usuario se trata como no autenticado
    let user: Option<&User> = store.current_user();

    let Some(user) = user else {
        if constraints.require_auth || constraints.has_role_constraints() {
            return GuardDecision::deny(DenyReason::Unauthenticated);
        }
        return GuardDecision::Render;
    };

    check_user(user.role, constraints)
}

fn check_user(role: Role, constraints: &GuardConstraints) -> GuardDecision {
    if let Some(allowed_roles) = &constraints.allowed_roles {
        if !has_permission(role, allowed_roles.as_slice()) {
            return GuardDecision::deny(DenyReason::RoleNotAllowed);
        }
    }

    if let Some(resource) = &constraints.resource {
        if !can_access_resource(role, resource) {
            return GuardDecision::deny(DenyReason::ResourceForbidden);
        }
    }

    GuardDecision::Render
}
