// ============================================================================
// AUTH STORE - Sesión del usuario (reducer + acciones explícitas)
// ============================================================================
// Se comparte vía `AuthContextProvider` (use_reducer). Toda mutación pasa por
// `AuthAction`; cada `LoginStart` se cierra con exactamente un
// `LoginSuccess`/`LoginFailure`.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{AuthTokens, PersistedSession, ProfileUpdate, Role, User};

#[derive(Debug, Clone, PartialEq)]
pub struct AuthStore {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub tokens: Option<AuthTokens>,
    /// true durante la hidratación inicial y mientras hay un login en vuelo
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginStart,
    LoginSuccess(PersistedSession),
    LoginFailure(String),
    /// Resultado de leer la sesión persistida: `None` = no autenticado
    InitializeAuth(Option<PersistedSession>),
    Logout,
    UpdateProfile(ProfileUpdate),
    ClearError,
}

impl Default for AuthStore {
    /// Estado de arranque: pendiente de hidratar desde localStorage
    fn default() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            tokens: None,
            is_loading: true,
            error: None,
        }
    }
}

impl AuthStore {
    pub fn signed_out() -> Self {
        Self {
            is_loading: false,
            ..Self::default()
        }
    }

    pub fn signed_in(session: PersistedSession) -> Self {
        let mut store = Self::signed_out();
        store.establish(session);
        store
    }

    /// Usuario solo si la sesión es coherente (autenticado Y con usuario)
    pub fn current_user(&self) -> Option<&User> {
        if self.is_authenticated {
            self.user.as_ref()
        } else {
            None
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user().map(|user| user.role)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.current_user()?;
        self.tokens.as_ref().map(|tokens| tokens.access.as_str())
    }

    pub fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::LoginStart => {
                self.is_loading = true;
                self.error = None;
            }
            AuthAction::LoginSuccess(session) => {
                self.establish(session);
                self.error = None;
            }
            AuthAction::LoginFailure(message) => {
                self.clear_session();
                self.error = Some(message);
            }
            AuthAction::InitializeAuth(Some(session)) => self.establish(session),
            AuthAction::InitializeAuth(None) => self.clear_session(),
            AuthAction::Logout => {
                self.clear_session();
                self.error = None;
            }
            AuthAction::UpdateProfile(update) => {
                if let Some(user) = self.user.as_mut() {
                    user.apply_profile_update(update);
                }
            }
            AuthAction::ClearError => self.error = None,
        }
    }

    fn establish(&mut self, session: PersistedSession) {
        self.user = Some(session.user);
        self.tokens = Some(session.tokens);
        self.is_authenticated = true;
        self.is_loading = false;
    }

    fn clear_session(&mut self) {
        self.user = None;
        self.tokens = None;
        self.is_authenticated = false;
        self.is_loading = false;
    }
}

impl Reducible for AuthStore {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> PersistedSession {
        PersistedSession {
            user: User {
                id: 42,
                name: "Grace".to_string(),
                email: "grace@example.org".to_string(),
                role,
                phone: None,
                location: None,
                education_level: None,
                is_active: true,
                date_registered: None,
            },
            tokens: AuthTokens {
                access: "access-token".to_string(),
                refresh: "refresh-token".to_string(),
            },
        }
    }

    fn reduce(store: AuthStore, action: AuthAction) -> AuthStore {
        (*Rc::new(store).reduce(action)).clone()
    }

    #[test]
    fn starts_hydrating() {
        let store = AuthStore::default();
        assert!(store.is_loading);
        assert!(!store.is_authenticated);
        assert!(store.current_user().is_none());
    }

    #[test]
    fn failed_login_settles_loading_and_records_error() {
        let store = reduce(AuthStore::signed_out(), AuthAction::LoginStart);
        assert!(store.is_loading);

        let store = reduce(store, AuthAction::LoginFailure("Invalid password".to_string()));
        assert!(!store.is_authenticated);
        assert!(!store.is_loading);
        assert_eq!(store.error.as_deref(), Some("Invalid password"));
        assert!(store.user.is_none());
        assert!(store.tokens.is_none());
    }

    #[test]
    fn successful_login_populates_session() {
        let store = reduce(AuthStore::signed_out(), AuthAction::LoginFailure("boom".to_string()));
        let store = reduce(store, AuthAction::LoginStart);
        assert!(store.error.is_none(), "a new attempt clears the previous error");

        let store = reduce(store, AuthAction::LoginSuccess(session(Role::Mentor)));
        assert!(store.is_authenticated);
        assert!(!store.is_loading);
        assert_eq!(store.role(), Some(Role::Mentor));
        assert_eq!(store.access_token(), Some("access-token"));
    }

    #[test]
    fn hydration_settles_either_way() {
        let store = reduce(AuthStore::default(), AuthAction::InitializeAuth(None));
        assert!(!store.is_loading);
        assert!(!store.is_authenticated);

        let store = reduce(AuthStore::default(), AuthAction::InitializeAuth(Some(session(Role::Admin))));
        assert!(!store.is_loading);
        assert_eq!(store.role(), Some(Role::Admin));
    }

    #[test]
    fn logout_clears_everything() {
        let store = reduce(AuthStore::signed_in(session(Role::Company)), AuthAction::Logout);
        assert_eq!(store, AuthStore::signed_out());
    }

    #[test]
    fn inconsistent_store_exposes_no_user() {
        let mut store = AuthStore::signed_out();
        store.is_authenticated = true;
        assert!(store.current_user().is_none());
        assert!(store.access_token().is_none());

        let mut store = AuthStore::signed_in(session(Role::Mentee));
        store.is_authenticated = false;
        assert!(store.role().is_none());
    }

    #[test]
    fn profile_update_requires_user() {
        let update = ProfileUpdate {
            name: Some("Grace H.".to_string()),
            ..ProfileUpdate::default()
        };
        let store = reduce(AuthStore::signed_out(), AuthAction::UpdateProfile(update.clone()));
        assert!(store.user.is_none());

        let store = reduce(AuthStore::signed_in(session(Role::Mentee)), AuthAction::UpdateProfile(update));
        assert_eq!(store.current_user().map(|u| u.name.as_str()), Some("Grace H."));
    }

    #[test]
    fn clear_error_only_touches_error() {
        let store = reduce(AuthStore::signed_out(), AuthAction::LoginFailure("nope".to_string()));
        let store = reduce(store, AuthAction::ClearError);
        assert_eq!(store, AuthStore::signed_out());
    }
}
