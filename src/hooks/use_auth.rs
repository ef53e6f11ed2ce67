use yew::prelude::*;

use crate::hooks::auth_context::{use_auth_store, AuthContext};
use crate::models::{LoginRequest, ProfileUpdate, RegisterForm};
use crate::services::{
    clear_persisted_session, perform_login, persist_session, persist_user, register_user, registration_outcome,
};
use crate::stores::AuthAction;

pub struct UseAuthHandle {
    pub state: AuthContext,
    pub login: Callback<LoginRequest>,
    pub logout: Callback<()>,
    /// Registro sin login automático; el resultado llega por el callback
    pub register: Callback<(RegisterForm, Callback<Result<String, String>>)>,
    pub update_profile: Callback<ProfileUpdate>,
    pub clear_error: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_auth_store();

    // Login: LoginStart -> (LoginSuccess | LoginFailure), siempre uno de los dos
    let login = {
        let state = state.clone();
        Callback::from(move |credentials: LoginRequest| {
            if let Err(message) = credentials.validate() {
                log::warn!("⚠️ [AUTH] {}", message);
                state.dispatch(AuthAction::LoginFailure(message));
                return;
            }

            state.dispatch(AuthAction::LoginStart);
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match perform_login(&credentials).await {
                    Ok(response) => {
                        let session = response.into_session();
                        if let Err(e) = persist_session(&session) {
                            log::warn!("⚠️ [AUTH] Sesión no persistida: {}", e);
                        }
                        log::info!("✅ [AUTH] Login exitoso: {} ({})", session.user.email, session.user.role);
                        state.dispatch(AuthAction::LoginSuccess(session));
                    }
                    Err(e) => {
                        log::error!("❌ [AUTH] Login fallido: {}", e);
                        state.dispatch(AuthAction::LoginFailure(e.user_message()));
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            clear_persisted_session();
            log::info!("👋 [AUTH] Logout");
            state.dispatch(AuthAction::Logout);
        })
    };

    let register = Callback::from(
        move |(form, on_done): (RegisterForm, Callback<Result<String, String>>)| {
            let payload = match form.into_request() {
                Ok(payload) => payload,
                Err(message) => {
                    log::warn!("⚠️ [AUTH] {}", message);
                    on_done.emit(Err(message));
                    return;
                }
            };
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = registration_outcome(register_user(&payload).await);
                match &outcome {
                    Ok(_) => log::info!("✅ [AUTH] Registro completado: {}", payload.email),
                    Err(message) => log::error!("❌ [AUTH] Registro fallido: {}", message),
                }
                on_done.emit(outcome);
            });
        },
    );

    let update_profile = {
        let state = state.clone();
        Callback::from(move |update: ProfileUpdate| {
            if let Some(user) = state.current_user() {
                let mut updated = user.clone();
                updated.apply_profile_update(update.clone());
                if let Err(e) = persist_user(&updated) {
                    log::warn!("⚠️ [AUTH] Perfil no persistido: {}", e);
                }
            }
            state.dispatch(AuthAction::UpdateProfile(update));
        })
    };

    let clear_error = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(AuthAction::ClearError))
    };

    UseAuthHandle {
        state,
        login,
        logout,
        register,
        update_profile,
        clear_error,
    }
}
