use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::LoginRequest;
use crate::services::navigate;
use crate::viewmodels::signed_in_destination;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_auth();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let login = auth.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                // La validación ("Please fill in all fields") la hace use_auth
                login.emit(LoginRequest::new(email_input.value(), password_input.value()));
            }
        })
    };

    let on_input = {
        let clear_error = auth.clear_error.clone();
        let has_error = auth.state.error.is_some();
        Callback::from(move |_: InputEvent| {
            if has_error {
                clear_error.emit(());
            }
        })
    };

    // Sesión ya abierta (p. ej. volviendo a /auth/login desde la landing)
    let destination = signed_in_destination(&auth.state);
    use_effect_with(destination, |destination| {
        if let Some(to) = destination {
            navigate(to);
        }
        || ()
    });

    if destination.is_some() {
        return html! {
            <div class="login-screen">
                <p class="login-redirecting">{"Redirecting to your dashboard..."}</p>
            </div>
        };
    }

    let is_loading = auth.state.is_loading;

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Welcome back"}</h1>
                    <p>{"Sign in to continue"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    if let Some(error) = &auth.state.error {
                        <div class="login-error" role="alert">{error.clone()}</div>
                    }

                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@example.com"
                            ref={email_ref}
                            oninput={on_input.clone()}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Your password"
                            ref={password_ref}
                            oninput={on_input}
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={is_loading}>
                        <span class="btn-text">
                            { if is_loading { "Signing in..." } else { "Sign in" } }
                        </span>
                    </button>
                </form>
            </div>
        </div>
    }
}
