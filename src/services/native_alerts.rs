// ============================================================================
// ALERTAS NATIVAS - Notificaciones del sistema operativo (best effort)
// ============================================================================
// Capacidad inyectada: puede no existir o estar denegada. Nunca devuelve error
// al llamador; el feed in-app funciona igual sin ella.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{window, NotificationOptions, NotificationPermission};

use crate::models::Notification;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertPermission {
    Granted,
    Denied,
    /// El usuario todavía no ha decidido
    Default,
    /// El navegador no tiene API de notificaciones
    Unavailable,
}

pub trait NativeAlertSink {
    fn permission(&self) -> AlertPermission;

    fn request_permission(&self);

    /// Muestra la alerta; errores se absorben dentro de la implementación
    fn show(&self, notification: &Notification);
}

/// Pide permiso solo si aún no se decidió
pub fn ensure_permission(sink: &dyn NativeAlertSink) {
    if sink.permission() == AlertPermission::Default {
        log::info!("🔔 [NOTIF] Solicitando permiso de notificaciones");
        sink.request_permission();
    }
}

/// Envía las alertas si hay permiso; devuelve cuántas se mostraron
pub fn surface_alerts(sink: &dyn NativeAlertSink, notifications: &[&Notification]) -> usize {
    if notifications.is_empty() {
        return 0;
    }
    match sink.permission() {
        AlertPermission::Granted => {
            for notification in notifications {
                sink.show(notification);
            }
            notifications.len()
        }
        other => {
            log::debug!("🔕 [NOTIF] Alertas nativas omitidas ({:?})", other);
            0
        }
    }
}

/// API `Notification` del navegador
#[derive(Clone, Debug, Default)]
pub struct BrowserAlertSink {
    icon: Option<String>,
}

impl BrowserAlertSink {
    pub fn new() -> Self {
        Self {
            icon: Some("/favicon.ico".to_string()),
        }
    }

    fn is_supported() -> bool {
        window()
            .map(|win| js_sys::Reflect::has(&win, &JsValue::from_str("Notification")).unwrap_or(false))
            .unwrap_or(false)
    }
}

impl NativeAlertSink for BrowserAlertSink {
    fn permission(&self) -> AlertPermission {
        if !Self::is_supported() {
            return AlertPermission::Unavailable;
        }
        match web_sys::Notification::permission() {
            NotificationPermission::Granted => AlertPermission::Granted,
            NotificationPermission::Denied => AlertPermission::Denied,
            _ => AlertPermission::Default,
        }
    }

    fn request_permission(&self) {
        if !Self::is_supported() {
            return;
        }
        // La promesa se descarta: el resultado se lee en el próximo `permission()`
        if let Err(e) = web_sys::Notification::request_permission() {
            log::debug!("🔕 [NOTIF] request_permission falló: {:?}", e);
        }
    }

    fn show(&self, notification: &Notification) {
        let options = NotificationOptions::new();
        options.set_body(&notification.message);
        options.set_tag(&notification.id);
        if let Some(icon) = &self.icon {
            options.set_icon(icon);
        }

        if let Err(e) = web_sys::Notification::new_with_options(&notification.title, &options) {
            log::debug!("🔕 [NOTIF] No se pudo mostrar la alerta {}: {:?}", notification.id, e);
        }
    }
}

/// Sink vacío (tests, entornos sin navegador)
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopAlertSink;

impl NativeAlertSink for NoopAlertSink {
    fn permission(&self) -> AlertPermission {
        AlertPermission::Unavailable
    }

    fn request_permission(&self) {}

    fn show(&self, _notification: &Notification) {}
}

pub type SharedAlertSink = Rc<dyn NativeAlertSink>;
