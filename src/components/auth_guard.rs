// ============================================================================
// AUTH GUARD - Renderiza los hijos solo si la sesión cumple las restricciones
// ============================================================================
// La decisión se calcula una vez por render y se usa tanto para no pintar
// los hijos como para programar la redirección.
// ============================================================================

use yew::prelude::*;

use crate::components::LoadingSpinner;
use crate::hooks::use_auth_store;
use crate::services::navigate;
use crate::viewmodels::{evaluate, GuardConstraints, GuardDecision};

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps {
    pub children: Children,
    #[prop_or(true)]
    pub require_auth: bool,
    /// Roles permitidos (sin distinguir mayúsculas)
    #[prop_or_default]
    pub allowed_roles: Option<Vec<String>>,
    #[prop_or_default]
    pub resource: Option<String>,
}

#[function_component(AuthGuard)]
pub fn auth_guard(props: &AuthGuardProps) -> Html {
    let auth = use_auth_store();

    let constraints = GuardConstraints {
        require_auth: props.require_auth,
        allowed_roles: props.allowed_roles.clone(),
        resource: props.resource.clone(),
    };
    let decision = evaluate(&auth, &constraints);

    {
        let redirect = match &decision {
            GuardDecision::Redirect { to, reason } => Some((to.clone(), *reason)),
            _ => None,
        };
        use_effect_with(redirect, |redirect| {
            if let Some((to, reason)) = redirect {
                log::info!("🛡️ [GUARD] {:?} -> {}", reason, to);
                navigate(to);
            }
            || ()
        });
    }

    match decision {
        GuardDecision::Loading => html! { <LoadingSpinner message="Checking your session..." /> },
        GuardDecision::Render => html! { <>{props.children.clone()}</> },
        GuardDecision::Redirect { .. } => Html::default(),
    }
}
