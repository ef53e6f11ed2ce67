// ============================================================================
// CONFIG - Configuración de la app (compile time, via build.rs + .env)
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::utils::constants::{FALLBACK_ROUTE, LOGIN_ROUTE, UNAUTHORIZED_ROUTE};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub notifications: NotificationConfig,
    pub routes: RouteConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: "http://localhost:8082".to_string(),
            api_url_production: "https://api.shenation.org".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            notifications: NotificationConfig::default(),
            routes: RouteConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Intervalo entre consultas al backend
    pub poll_interval_seconds: u32,
    /// Solo se muestran alertas nativas de notificaciones más recientes que esto
    pub native_alert_window_seconds: i64,
    /// Ventana para derivar notificaciones de reservas
    pub booking_window_minutes: i64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            poll_interval_seconds: 30,
            native_alert_window_seconds: 60,
            booking_window_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub login: String,
    pub unauthorized: String,
    pub fallback: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login: LOGIN_ROUTE.to_string(),
            unauthorized: UNAUTHORIZED_ROUTE.to_string(),
            fallback: FALLBACK_ROUTE.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let notification_defaults = NotificationConfig::default();

        Self {
            api_url_development: option_env!("SHENATION_API_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.api_url_development),
            api_url_production: option_env!("SHENATION_API_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.api_url_production),
            environment: option_env!("SHENATION_ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: parse_or(option_env!("SHENATION_ENABLE_LOGGING"), true),
            notifications: NotificationConfig {
                poll_interval_seconds: parse_or(
                    option_env!("SHENATION_NOTIFICATION_POLL_SECONDS"),
                    notification_defaults.poll_interval_seconds,
                ),
                native_alert_window_seconds: parse_or(
                    option_env!("SHENATION_NATIVE_ALERT_WINDOW_SECONDS"),
                    notification_defaults.native_alert_window_seconds,
                ),
                booking_window_minutes: parse_or(
                    option_env!("SHENATION_BOOKING_WINDOW_MINUTES"),
                    notification_defaults.booking_window_minutes,
                ),
            },
            routes: RouteConfig::default(),
        }
    }

    /// URL base del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        }
    }

    /// Prefijo de la API REST (`{backend}/api`)
    pub fn api_url(&self) -> String {
        format!("{}/api", self.backend_url().trim_end_matches('/'))
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn poll_interval_ms(&self) -> u32 {
        self.notifications.poll_interval_seconds.saturating_mul(1000)
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
