use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::{RegisterForm, Role};
use crate::services::navigate;
use crate::utils::constants::LOGIN_ROUTE;

const EDUCATION_LEVELS: &[(&str, &str)] = &[
    ("high_school", "High School"),
    ("bachelor", "Bachelor's Degree"),
    ("master", "Master's Degree"),
    ("phd", "PhD"),
    ("other", "Other"),
];

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>().map(|input| input.value()).unwrap_or_default()
}

fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>().map(|select| select.value()).unwrap_or_default()
}

#[function_component(RegisterScreen)]
pub fn register_screen() -> Html {
    let auth = use_auth();
    let outcome = use_state(|| None::<Result<String, String>>);
    let submitting = use_state(|| false);

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let location_ref = use_node_ref();
    let role_ref = use_node_ref();
    let education_ref = use_node_ref();

    let on_submit = {
        let register = auth.register.clone();
        let outcome = outcome.clone();
        let submitting = submitting.clone();
        let refs = (
            name_ref.clone(),
            email_ref.clone(),
            password_ref.clone(),
            confirm_ref.clone(),
            phone_ref.clone(),
            location_ref.clone(),
            role_ref.clone(),
            education_ref.clone(),
        );

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (name, email, password, confirm, phone, location, role, education) = &refs;
            let form = RegisterForm {
                name: input_value(name),
                email: input_value(email),
                password: input_value(password),
                confirm_password: input_value(confirm),
                phone: input_value(phone),
                location: input_value(location),
                role: select_value(role),
                education_level: select_value(education),
            };

            submitting.set(true);
            let outcome = outcome.clone();
            let submitting = submitting.clone();
            register.emit((
                form,
                Callback::from(move |result: Result<String, String>| {
                    submitting.set(false);
                    outcome.set(Some(result));
                }),
            ));
        })
    };

    if let Some(Ok(message)) = &*outcome {
        let go_to_login = Callback::from(|_: MouseEvent| navigate(LOGIN_ROUTE));
        return html! {
            <div class="login-screen">
                <div class="login-container">
                    <p class="register-success">{message.clone()}</p>
                    <button type="button" class="btn-login" onclick={go_to_login}>{"Sign in"}</button>
                </div>
            </div>
        };
    }

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Create your account"}</h1>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    if let Some(Err(error)) = &*outcome {
                        <div class="login-error" role="alert">{error.clone()}</div>
                    }

                    <div class="form-group">
                        <label for="name">{"Full name"}</label>
                        <input type="text" id="name" ref={name_ref} />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" ref={email_ref} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" ref={password_ref} />
                    </div>
                    <div class="form-group">
                        <label for="confirm-password">{"Confirm password"}</label>
                        <input type="password" id="confirm-password" ref={confirm_ref} />
                    </div>
                    <div class="form-group">
                        <label for="phone">{"Phone"}</label>
                        <input type="tel" id="phone" ref={phone_ref} />
                    </div>
                    <div class="form-group">
                        <label for="location">{"Location"}</label>
                        <input type="text" id="location" ref={location_ref} />
                    </div>
                    <div class="form-group">
                        <label for="role">{"Role"}</label>
                        <select id="role" ref={role_ref}>
                            <option value="">{"Select your role"}</option>
                            { for Role::ALL.iter().map(|role| html! {
                                <option value={role.as_str()}>{role.as_str()}</option>
                            }) }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="education">{"Education level"}</label>
                        <select id="education" ref={education_ref}>
                            <option value="">{"Select your education level"}</option>
                            { for EDUCATION_LEVELS.iter().map(|(value, label)| html! {
                                <option value={*value}>{*label}</option>
                            }) }
                        </select>
                    </div>

                    <button type="submit" class="btn-login" disabled={*submitting}>
                        { if *submitting { "Creating account..." } else { "Create account" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
