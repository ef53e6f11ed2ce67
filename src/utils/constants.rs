// Rutas de la app
pub const LANDING_ROUTE: &str = "/";
pub const AUTH_ROUTE_PREFIX: &str = "/auth/";
pub const LOGIN_ROUTE: &str = "/auth/login";
pub const REGISTER_ROUTE: &str = "/auth/signup";
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";
/// Destino cuando un rol no tiene ruta propia
pub const FALLBACK_ROUTE: &str = "/dashboard";

// Claves de localStorage para la sesión persistida
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "shenation_token";
pub const STORAGE_KEY_REFRESH_TOKEN: &str = "shenation_refresh_token";
pub const STORAGE_KEY_USER: &str = "shenation_user";

/// Evento que se despacha en `window` tras cada navegación programática
pub const LOCATION_CHANGE_EVENT: &str = "locationchange";
