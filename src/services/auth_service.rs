use gloo_net::http::{Request, Response};

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    AuthTokens, ErrorBody, LoginRequest, LoginResponse, PersistedSession, RegisterRequest,
    RegisterResponse, User,
};
use crate::utils::constants::{STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_REFRESH_TOKEN, STORAGE_KEY_USER};
use crate::utils::{load_raw, remove_from_storage, save_raw, save_to_storage};

/// Login contra `/auth/login/`
pub async fn perform_login(credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    credentials.validate().map_err(ApiError::Validation)?;

    let url = format!("{}/auth/login/", CONFIG.api_url());
    log::info!("🔐 [AUTH] Login para {}", credentials.email);

    let response = Request::post(&url)
        .json(credentials)
        .map_err(|e| ApiError::Parse(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(http_error(response, "Login failed").await);
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Alta de usuario (`/auth/register/`); el login es un paso aparte
pub async fn register_user(payload: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    let url = format!("{}/auth/register/", CONFIG.api_url());
    log::info!("📝 [AUTH] Registro de {} como {}", payload.email, payload.role);

    let response = Request::post(&url)
        .json(payload)
        .map_err(|e| ApiError::Parse(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(http_error(response, "Registration failed").await);
    }

    response
        .json::<RegisterResponse>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Resultado del alta para la UI: mensaje de éxito o mensaje de error
pub fn registration_outcome(result: Result<RegisterResponse, ApiError>) -> Result<String, String> {
    match result {
        Ok(response) if !response.message.trim().is_empty() => Ok(response.message),
        Ok(_) => Ok("Registration successful!".to_string()),
        Err(e) => Err(e.user_message()),
    }
}

async fn http_error(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Http {
        status,
        message: error_message_from_body(&body, fallback),
    }
}

/// Extrae `detail`/`message` del cuerpo de error del backend
pub fn error_message_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| fallback.to_string())
}

// ============================================================================
// Persistencia de la sesión (localStorage)
// ============================================================================

pub fn persist_session(session: &PersistedSession) -> Result<(), ApiError> {
    save_raw(STORAGE_KEY_ACCESS_TOKEN, &session.tokens.access).map_err(ApiError::Storage)?;
    save_raw(STORAGE_KEY_REFRESH_TOKEN, &session.tokens.refresh).map_err(ApiError::Storage)?;
    save_to_storage(STORAGE_KEY_USER, &session.user).map_err(ApiError::Storage)?;
    Ok(())
}

pub fn persist_user(user: &User) -> Result<(), ApiError> {
    save_to_storage(STORAGE_KEY_USER, user).map_err(ApiError::Storage)
}

pub fn clear_persisted_session() {
    for key in [STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_REFRESH_TOKEN, STORAGE_KEY_USER] {
        if let Err(e) = remove_from_storage(key) {
            log::warn!("⚠️ [AUTH] {}", e);
        }
    }
}

/// Lee la sesión guardada. Una sesión incompleta o corrupta se borra y cuenta
/// como "no autenticado"
pub fn load_persisted_session() -> Option<PersistedSession> {
    let access = load_raw(STORAGE_KEY_ACCESS_TOKEN);
    let refresh = load_raw(STORAGE_KEY_REFRESH_TOKEN);
    let user = load_raw(STORAGE_KEY_USER);
    let had_anything = access.is_some() || refresh.is_some() || user.is_some();

    match session_from_parts(access, refresh, user) {
        Ok(session) => session,
        Err(e) => {
            if had_anything {
                log::warn!("⚠️ [AUTH] Sesión guardada inválida, se descarta: {}", e);
                clear_persisted_session();
            }
            None
        }
    }
}

/// Reconstruye la sesión a partir de lo guardado. `Ok(None)` si no hay nada
pub fn session_from_parts(
    access: Option<String>,
    refresh: Option<String>,
    user_json: Option<String>,
) -> Result<Option<PersistedSession>, String> {
    match (access, refresh, user_json) {
        (None, None, None) => Ok(None),
        (Some(access), Some(refresh), Some(user_json)) => {
            if access.is_empty() || refresh.is_empty() {
                return Err("token vacío".to_string());
            }
            let user: User = serde_json::from_str(&user_json)
                .map_err(|e| format!("usuario ilegible: {}", e))?;
            Ok(Some(PersistedSession {
                user,
                tokens: AuthTokens { access, refresh },
            }))
        }
        _ => Err("sesión incompleta".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    const USER_JSON: &str = r#"{"id": 3, "name": "Ngozi", "email": "ngozi@example.org", "role": "lecturer"}"#;

    #[test]
    fn nothing_stored_means_signed_out() {
        assert_eq!(session_from_parts(None, None, None), Ok(None));
    }

    #[test]
    fn complete_snapshot_is_restored() {
        let session = session_from_parts(
            Some("access".to_string()),
            Some("refresh".to_string()),
            Some(USER_JSON.to_string()),
        )
        .unwrap()
        .unwrap();
        assert_eq!(session.user.role, Role::Lecturer);
        assert_eq!(session.tokens.access, "access");
    }

    #[test]
    fn partial_or_corrupt_snapshots_are_rejected() {
        assert!(session_from_parts(Some("access".to_string()), None, None).is_err());
        assert!(session_from_parts(
            Some("access".to_string()),
            Some("refresh".to_string()),
            Some("{not json".to_string())
        )
        .is_err());
        assert!(session_from_parts(
            Some(String::new()),
            Some("refresh".to_string()),
            Some(USER_JSON.to_string())
        )
        .is_err());
        let unknown_role = USER_JSON.replace("lecturer", "guest");
        assert!(session_from_parts(
            Some("access".to_string()),
            Some("refresh".to_string()),
            Some(unknown_role)
        )
        .is_err());
    }

    #[test]
    fn backend_error_messages() {
        assert_eq!(
            error_message_from_body(r#"{"detail": "Invalid password"}"#, "Login failed"),
            "Invalid password"
        );
        assert_eq!(
            error_message_from_body(r#"{"message": "User not found"}"#, "Login failed"),
            "User not found"
        );
        assert_eq!(error_message_from_body("<html>502</html>", "Login failed"), "Login failed");
        assert_eq!(error_message_from_body(r#"{"detail": ""}"#, "Login failed"), "Login failed");
    }

    #[test]
    fn registration_outcomes() {
        let ok = RegisterResponse {
            message: "User created".to_string(),
        };
        assert_eq!(registration_outcome(Ok(ok)), Ok("User created".to_string()));

        let silent = RegisterResponse { message: String::new() };
        assert_eq!(registration_outcome(Ok(silent)), Ok("Registration successful!".to_string()));

        let taken = ApiError::Http {
            status: 400,
            message: error_message_from_body(r#"{"detail": "Email already registered"}"#, "Registration failed"),
        };
        assert_eq!(registration_outcome(Err(taken)), Err("Email already registered".to_string()));

        let offline = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(
            registration_outcome(Err(offline)),
            Err("Unable to reach the server. Please try again.".to_string())
        );
    }
}
