// ============================================================================
// ERRORES DE API - Fallos de red/HTTP/parseo convertidos a mensajes de usuario
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// El backend respondió con error; `message` ya es legible para el usuario
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Mensaje a mostrar en la UI (toast / formulario)
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Unable to reach the server. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_surface_the_backend_message() {
        let err = ApiError::Http { status: 401, message: "Invalid password".to_string() };
        assert_eq!(err.user_message(), "Invalid password");
    }

    #[test]
    fn network_errors_hide_transport_details() {
        let err = ApiError::Network("TypeError: Failed to fetch".to_string());
        assert!(!err.user_message().contains("TypeError"));
        assert_eq!(err.user_message(), "Unable to reach the server. Please try again.");
    }
}
