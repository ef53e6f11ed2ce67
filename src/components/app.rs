// ============================================================================
// APP - Providers + cabecera + selección de página por ruta
// ============================================================================

use yew::prelude::*;

use super::{AuthGuard, LoginScreen, NotificationBell, RegisterScreen, RoleBasedRedirect};
use crate::hooks::{use_auth, use_auth_store, use_current_path, AuthContextProvider, NotificationContextProvider};
use crate::services::{navigate, resources_for};
use crate::utils::constants::{AUTH_ROUTE_PREFIX, LANDING_ROUTE, LOGIN_ROUTE, REGISTER_ROUTE, UNAUTHORIZED_ROUTE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Login,
    Register,
    Unauthorized,
    NotFound,
    Protected {
        title: &'static str,
        resource: Option<&'static str>,
        allowed_roles: Option<Vec<String>>,
    },
}

/// Ruta protegida: `:id` acepta un único segmento dinámico
struct RouteRule {
    pattern: &'static str,
    title: &'static str,
    resource: Option<&'static str>,
    roles: &'static [&'static str],
}

const fn route(
    pattern: &'static str,
    title: &'static str,
    resource: Option<&'static str>,
    roles: &'static [&'static str],
) -> RouteRule {
    RouteRule {
        pattern,
        title,
        resource,
        roles,
    }
}

const STAFF: &[&str] = &["admin", "mentor", "company", "lecturer"];
const MENTOR_AND_ADMIN: &[&str] = &["mentor", "admin"];

// Los patrones más específicos van antes que los dinámicos
const PROTECTED_ROUTES: &[RouteRule] = &[
    route("/dashboard", "Dashboard", Some("dashboard"), &[]),
    route("/users", "Users", Some("users"), &["admin"]),
    route("/profile", "Profile", None, &[]),
    route("/courses", "Courses", None, &[]),
    route("/courses/:id", "Course", None, &[]),
    route("/forum", "Forum", None, &[]),
    route("/sessions", "Sessions", None, &[]),
    route("/bookings", "Bookings", None, &[]),
    route("/mentorship", "Mentorship", None, &[]),
    route("/jobs", "Jobs", None, &[]),
    route("/jobs/create", "Post a job", None, &[]),
    route("/jobs/applicants", "Applicants", None, STAFF),
    route("/jobs/:id", "Job", None, &[]),
    route("/calendar", "Calendar", None, &["mentor", "mentee", "admin"]),
    route("/mentor-bookings", "Booking requests", None, MENTOR_AND_ADMIN),
    route("/mentor-analytics", "Mentor analytics", None, MENTOR_AND_ADMIN),
];

/// ¿Tiene el recurso una página propia en `/<recurso>`?
fn has_page(resource: &str) -> bool {
    let path = format!("/{}", resource);
    PROTECTED_ROUTES.iter().any(|rule| rule.pattern == path)
}

fn matches_pattern(pattern: &str, path: &str) -> bool {
    match pattern.strip_suffix("/:id") {
        Some(prefix) => path
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|segment| !segment.is_empty() && !segment.contains('/')),
        None => pattern == path,
    }
}

/// Ruta -> página. Rutas no registradas: NotFound (nunca se infiere un recurso).
pub fn page_for(path: &str) -> Page {
    let path = path.trim_end_matches('/');
    if path.is_empty() || path == LANDING_ROUTE {
        return Page::Landing;
    }
    if path == UNAUTHORIZED_ROUTE {
        return Page::Unauthorized;
    }
    if path == REGISTER_ROUTE {
        return Page::Register;
    }
    if path == AUTH_ROUTE_PREFIX.trim_end_matches('/') || path.starts_with(AUTH_ROUTE_PREFIX) {
        return Page::Login;
    }

    PROTECTED_ROUTES
        .iter()
        .find(|rule| matches_pattern(rule.pattern, path))
        .map_or(Page::NotFound, |rule| Page::Protected {
            title: rule.title,
            resource: rule.resource,
            allowed_roles: (!rule.roles.is_empty())
                .then(|| rule.roles.iter().map(|role| role.to_string()).collect()),
        })
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthContextProvider>
            <NotificationContextProvider>
                <Shell />
            </NotificationContextProvider>
        </AuthContextProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let path = use_current_path();
    let auth = use_auth();

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let header_user = auth.state.current_user().map(|user| {
        html! {
            <div class="app-header__user">
                <NotificationBell />
                <span class="app-header__name">{user.name.clone()}</span>
                <button type="button" class="btn-logout" onclick={on_logout}>{"Log out"}</button>
            </div>
        }
    });

    let content = match page_for(&path) {
        Page::Landing => html! { <LandingPage /> },
        Page::Login => html! { <LoginScreen /> },
        Page::Register => html! { <RegisterScreen /> },
        Page::Unauthorized => html! { <UnauthorizedPage /> },
        Page::NotFound => html! { <NotFoundPage /> },
        Page::Protected {
            title,
            resource,
            allowed_roles,
        } => html! {
            <AuthGuard resource={resource.map(str::to_string)} {allowed_roles}>
                <ResourcePage {title} />
            </AuthGuard>
        },
    };

    html! {
        <div class="app">
            <RoleBasedRedirect />
            <header class="app-header">
                <span class="app-title">{"SheNation"}</span>
                { for header_user }
            </header>
            <main class="app-main">{content}</main>
        </div>
    }
}

#[function_component(LandingPage)]
fn landing_page() -> Html {
    let go_to_login = Callback::from(|_: MouseEvent| navigate(LOGIN_ROUTE));
    let go_to_register = Callback::from(|_: MouseEvent| navigate(REGISTER_ROUTE));
    html! {
        <section class="landing">
            <h1>{"Empowering women through mentorship, learning and work"}</h1>
            <button type="button" class="btn-primary" onclick={go_to_login}>{"Sign in"}</button>
            <button type="button" class="btn-secondary" onclick={go_to_register}>{"Create account"}</button>
        </section>
    }
}

#[function_component(UnauthorizedPage)]
fn unauthorized_page() -> Html {
    let go_home = Callback::from(|_: MouseEvent| navigate(LANDING_ROUTE));
    html! {
        <section class="unauthorized">
            <h1>{"Access denied"}</h1>
            <p>{"You don't have permission to view this page."}</p>
            <button type="button" class="btn-secondary" onclick={go_home}>{"Go home"}</button>
        </section>
    }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    let go_home = Callback::from(|_: MouseEvent| navigate(LANDING_ROUTE));
    html! {
        <section class="not-found">
            <h1>{"Page not found"}</h1>
            <button type="button" class="btn-secondary" onclick={go_home}>{"Go home"}</button>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ResourcePageProps {
    title: &'static str,
}

/// Contenido real fuera de alcance: muestra el recurso y el menú del rol
#[function_component(ResourcePage)]
fn resource_page(props: &ResourcePageProps) -> Html {
    let auth = use_auth_store();
    let menu = auth.role().map(resources_for).unwrap_or_default();

    html! {
        <section class="resource-page">
            <nav class="resource-menu">
                { for menu.iter().filter(|resource| has_page(resource)).map(|resource| {
                    let target = format!("/{}", resource);
                    let onclick = Callback::from(move |_: MouseEvent| navigate(&target));
                    html! { <button type="button" key={*resource} {onclick}>{*resource}</button> }
                }) }
            </nav>
            <h1>{props.title}</h1>
        </section>
    }
}
