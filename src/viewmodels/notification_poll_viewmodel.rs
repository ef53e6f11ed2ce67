// ============================================================================
// NOTIFICATION POLL VIEWMODEL - Ciclo de vida de la suscripción de polling
// ============================================================================
// Con token se arranca; sin token se vacía el feed. Cada arranque crea una
// suscripción nueva que el cleanup detiene: los lotes que lleguen después ya
// no producen acciones.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::models::Notification;
use crate::stores::NotificationAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollPlan {
    Start { token: String, interval_ms: u32 },
    /// Sesión cerrada: no hay polling y el feed se limpia
    Reset,
}

pub fn plan_for_token(token: Option<&str>, interval_ms: u32) -> PollPlan {
    match token.map(str::trim).filter(|token| !token.is_empty()) {
        Some(token) => PollPlan::Start {
            token: token.to_string(),
            interval_ms,
        },
        None => PollPlan::Reset,
    }
}

/// Las copias comparten estado: detener una detiene todas
#[derive(Debug, Clone)]
pub struct PollSubscription {
    alive: Rc<Cell<bool>>,
}

impl PollSubscription {
    pub fn start() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn stop(&self) {
        self.alive.set(false);
    }

    /// Acción a despachar para un lote recibido; `None` si ya se detuvo
    pub fn deliver(&self, notifications: Vec<Notification>, checked_at: DateTime<Utc>) -> Option<NotificationAction> {
        self.is_alive().then_some(NotificationAction::Received {
            notifications,
            checked_at,
        })
    }
}
