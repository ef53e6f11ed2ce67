// ============================================================================
// NOTIFICATIONS - Provider del feed + polling + alertas nativas
// ============================================================================
// Mientras haya token se consulta al montar y luego cada N segundos. Al cerrar
// sesión el intervalo se cancela y el feed se vacía. Las respuestas que llegan
// después del cleanup se descartan.
// ============================================================================

use std::rc::Rc;

use chrono::{Duration, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::auth_context::use_auth_store;
use crate::services::{ensure_permission, fetch_notifications, surface_alerts, BrowserAlertSink, SharedAlertSink};
use crate::stores::{NotificationAction, NotificationStore};
use crate::viewmodels::{plan_for_token, PollPlan, PollSubscription};

pub type NotificationContext = UseReducerHandle<NotificationStore>;

#[derive(Properties, PartialEq)]
pub struct NotificationContextProviderProps {
    pub children: Children,
}

#[function_component(NotificationContextProvider)]
pub fn notification_context_provider(props: &NotificationContextProviderProps) -> Html {
    let auth = use_auth_store();
    let feed = use_reducer(NotificationStore::default);
    let interval_handle = use_mut_ref(|| None::<Interval>);
    let sink = use_memo((), |_| Rc::new(BrowserAlertSink::new()) as SharedAlertSink);

    // Polling ligado al token de acceso
    {
        let feed = feed.clone();
        let interval_handle = interval_handle.clone();
        let token = auth.access_token().map(str::to_string);

        use_effect_with(token, move |token| {
            *interval_handle.borrow_mut() = None;
            let subscription = PollSubscription::start();

            match plan_for_token(token.as_deref(), CONFIG.poll_interval_ms()) {
                PollPlan::Start { token, interval_ms } => {
                    log::info!("⏰ [NOTIF] Polling cada {} segundos", interval_ms / 1000);

                    poll_once(feed.clone(), token.clone(), subscription.clone());

                    let tick_feed = feed.clone();
                    let tick_subscription = subscription.clone();
                    let interval = Interval::new(interval_ms, move || {
                        poll_once(tick_feed.clone(), token.clone(), tick_subscription.clone());
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }
                PollPlan::Reset => {
                    if !feed.is_empty() {
                        log::info!("🧹 [NOTIF] Sesión cerrada, limpiando feed");
                    }
                    feed.dispatch(NotificationAction::Clear);
                }
            }

            move || {
                subscription.stop();
                *interval_handle.borrow_mut() = None;
            }
        });
    }

    // Permiso de alertas nativas al iniciar sesión
    {
        let sink = sink.clone();
        use_effect_with(auth.is_authenticated, move |authenticated| {
            if *authenticated {
                ensure_permission(sink.as_ref().as_ref());
            }
            || ()
        });
    }

    // Alertas nativas por cada lote con llegadas nuevas
    {
        let feed = feed.clone();
        let sink = sink.clone();
        use_effect_with(feed.generation(), move |_| {
            let window = Duration::seconds(CONFIG.notifications.native_alert_window_seconds);
            let candidates = feed.native_alert_candidates(Utc::now(), window);
            let shown = surface_alerts(sink.as_ref().as_ref(), &candidates);
            if shown > 0 {
                log::info!("🔔 [NOTIF] {} alertas nativas", shown);
            }
            || ()
        });
    }

    html! {
        <ContextProvider<NotificationContext> context={feed}>
            {props.children.clone()}
        </ContextProvider<NotificationContext>>
    }
}

fn poll_once(feed: NotificationContext, token: String, subscription: PollSubscription) {
    wasm_bindgen_futures::spawn_local(async move {
        let checked_at = Utc::now();
        match fetch_notifications(&token, checked_at).await {
            Ok(notifications) => match subscription.deliver(notifications, checked_at) {
                Some(action) => feed.dispatch(action),
                None => log::debug!("🔕 [NOTIF] Respuesta descartada (polling detenido)"),
            },
            // Un fallo no detiene el polling; el feed actual se conserva
            Err(e) => log::error!("❌ [NOTIF] Error consultando notificaciones: {}", e),
        }
    });
}

pub struct UseNotificationsHandle {
    pub feed: NotificationContext,
    pub mark_as_read: Callback<String>,
    pub mark_all_as_read: Callback<()>,
}

#[hook]
pub fn use_notifications() -> UseNotificationsHandle {
    let fallback = use_reducer(NotificationStore::default);
    let feed = use_context::<NotificationContext>().unwrap_or(fallback);

    let mark_as_read = {
        let feed = feed.clone();
        Callback::from(move |id: String| feed.dispatch(NotificationAction::MarkAsRead(id)))
    };

    let mark_all_as_read = {
        let feed = feed.clone();
        Callback::from(move |_| feed.dispatch(NotificationAction::MarkAllAsRead))
    };

    UseNotificationsHandle {
        feed,
        mark_as_read,
        mark_all_as_read,
    }
}
