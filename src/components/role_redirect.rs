use yew::prelude::*;

use crate::hooks::use_auth_store;
use crate::services::{current_path, navigate};
use crate::viewmodels::RoleRedirectTracker;

/// Lleva al usuario recién autenticado a la ruta de su rol. No renderiza nada.
#[function_component(RoleBasedRedirect)]
pub fn role_based_redirect() -> Html {
    let auth = use_auth_store();
    let tracker = use_mut_ref(RoleRedirectTracker::default);

    use_effect_with((*auth).clone(), move |store| {
        if let Some(target) = tracker.borrow_mut().observe(store, &current_path()) {
            navigate(&target);
        }
        || ()
    });

    Html::default()
}
