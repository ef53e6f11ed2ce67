// ============================================================================
// PERMISSION SERVICE - Tabla canónica rol -> recursos / rol -> ruta inicial
// ============================================================================
// Función pura: sin estado, sin efectos. Lo que no está en la tabla se deniega.
// ============================================================================

use crate::models::Role;
use crate::utils::constants::FALLBACK_ROUTE;

const ADMIN_RESOURCES: &[&str] = &[
    "dashboard",
    "users",
    "courses",
    "jobs",
    "mentorship",
    "forum",
    "analytics",
    "settings",
];
const MENTOR_RESOURCES: &[&str] = &["dashboard", "mentorship", "courses", "forum", "profile"];
const LECTURER_RESOURCES: &[&str] = &[
    "dashboard",
    "courses",
    "students",
    "forum",
    "profile",
    "analytics",
];
const COMPANY_RESOURCES: &[&str] = &["dashboard", "jobs", "candidates", "profile", "analytics"];
const MENTEE_RESOURCES: &[&str] = &[
    "dashboard",
    "courses",
    "mentorship",
    "jobs",
    "forum",
    "profile",
];

/// Recursos accesibles para un rol
pub fn resources_for(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => ADMIN_RESOURCES,
        Role::Mentor => MENTOR_RESOURCES,
        Role::Lecturer => LECTURER_RESOURCES,
        Role::Company => COMPANY_RESOURCES,
        Role::Mentee => MENTEE_RESOURCES,
    }
}

/// Ruta de aterrizaje tras el login
pub fn default_route_for(role: Role) -> &'static str {
    match role {
        Role::Admin | Role::Mentor | Role::Lecturer | Role::Company | Role::Mentee => "/dashboard",
    }
}

/// Igual que `default_route_for` pero con rol en texto; rol desconocido -> ruta genérica
pub fn default_route_for_str(role: &str) -> &'static str {
    Role::parse(role).map_or(FALLBACK_ROUTE, default_route_for)
}

pub fn can_access_resource(role: Role, resource: &str) -> bool {
    resources_for(role).contains(&resource)
}

/// Variante con rol en texto; rol desconocido -> false
pub fn can_access_resource_str(role: &str, resource: &str) -> bool {
    Role::parse(role).is_some_and(|role| can_access_resource(role, resource))
}

/// ¿Está `role` en la lista? Comparación sin distinguir mayúsculas;
/// entradas que no son un rol válido nunca coinciden
pub fn has_permission<S: AsRef<str>>(role: Role, allowed_roles: &[S]) -> bool {
    allowed_roles
        .iter()
        .filter_map(|allowed| Role::parse(allowed.as_ref()))
        .any(|allowed| allowed == role)
}
