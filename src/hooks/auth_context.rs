// ============================================================================
// AUTH CONTEXT - Compartir el AuthStore entre componentes
// ============================================================================
// El provider crea el reducer una sola vez e hidrata desde localStorage al
// montar. Los componentes leen con `use_auth_store()`.
// ============================================================================

use yew::prelude::*;

use crate::services::load_persisted_session;
use crate::stores::{AuthAction, AuthStore};

pub type AuthContext = UseReducerHandle<AuthStore>;

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y proporciona la sesión
#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let store = use_reducer(AuthStore::default);

    // Hidratación inicial (is_loading = true hasta aquí)
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            let session = load_persisted_session();
            match &session {
                Some(session) => log::info!(
                    "✅ [AUTH] Sesión restaurada: {} ({})",
                    session.user.email,
                    session.user.role
                ),
                None => log::info!("ℹ️ [AUTH] Sin sesión guardada"),
            }
            store.dispatch(AuthAction::InitializeAuth(session));
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={store}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Sesión actual. Sin provider se usa un store local "no autenticado"
#[hook]
pub fn use_auth_store() -> AuthContext {
    let fallback = use_reducer(AuthStore::signed_out);
    match use_context::<AuthContext>() {
        Some(store) => store,
        None => {
            log::warn!("⚠️ [AUTH] use_auth_store sin AuthContextProvider");
            fallback
        }
    }
}
