// ============================================================================
// NOTIFICATION STORE - Feed de notificaciones (reducer)
// ============================================================================
// Orden: timestamp descendente, fijado al insertar. `unread_count` siempre se
// calcula a partir de las entradas, nunca se guarda aparte.
// ============================================================================

use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};
use yew::Reducible;

use crate::models::Notification;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationStore {
    entries: Vec<Notification>,
    /// Entradas insertadas por el último `Received` con novedades
    latest_arrivals: Vec<Notification>,
    /// Se incrementa con cada lote que inserta algo
    generation: u64,
    last_checked: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationAction {
    Received {
        notifications: Vec<Notification>,
        checked_at: DateTime<Utc>,
    },
    MarkAsRead(String),
    MarkAllAsRead,
    Clear,
}

impl NotificationStore {
    pub fn notifications(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id == id)
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    pub fn latest_arrivals(&self) -> &[Notification] {
        &self.latest_arrivals
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_checked(&self) -> Option<DateTime<Utc>> {
        self.last_checked
    }

    /// Inserta lo que no existe todavía; devuelve cuántas entradas nuevas hubo
    pub fn receive(&mut self, batch: Vec<Notification>) -> usize {
        let mut inserted = Vec::new();

        for notification in batch {
            if self.get(&notification.id).is_some() {
                continue;
            }
            let position = self
                .entries
                .partition_point(|existing| existing.timestamp > notification.timestamp);
            self.entries.insert(position, notification.clone());
            inserted.push(notification);
        }

        let count = inserted.len();
        if count > 0 {
            self.latest_arrivals = inserted;
            self.generation += 1;
        }
        count
    }

    /// false si el id no existe o ya estaba leída
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(notification) if !notification.read => {
                notification.read = true;
                true
            }
            _ => false,
        }
    }

    pub fn mark_all_as_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.entries.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        changed
    }

    /// Llegadas recientes aún sin leer, candidatas a alerta nativa
    pub fn native_alert_candidates(&self, now: DateTime<Utc>, window: Duration) -> Vec<&Notification> {
        let threshold = now - window;
        self.latest_arrivals
            .iter()
            .filter(|arrival| arrival.timestamp > threshold)
            .filter_map(|arrival| self.get(&arrival.id))
            .filter(|current| !current.read)
            .collect()
    }

    pub fn apply(&mut self, action: NotificationAction) {
        match action {
            NotificationAction::Received {
                notifications,
                checked_at,
            } => {
                let inserted = self.receive(notifications);
                self.last_checked = Some(checked_at);
                if inserted > 0 {
                    log::info!("🔔 [NOTIF] {} notificaciones nuevas ({} sin leer)", inserted, self.unread_count());
                }
            }
            NotificationAction::MarkAsRead(id) => {
                self.mark_as_read(&id);
            }
            NotificationAction::MarkAllAsRead => {
                self.mark_all_as_read();
            }
            NotificationAction::Clear => *self = Self::default(),
        }
    }
}

impl Reducible for NotificationStore {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Texto del badge de la campana: nada con 0, "9+" a partir de 10
pub fn badge_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        1..=9 => Some(unread.to_string()),
        _ => Some("9+".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 20, 10, minute, 0).unwrap()
    }

    fn notification(id: &str, minute: u32) -> Notification {
        Notification::new(id, NotificationKind::NewBookingRequest, "New Booking Request", "Grace requested a session", at(minute))
    }

    fn ids(store: &NotificationStore) -> Vec<&str> {
        store.notifications().iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn arrival_then_mark_as_read_twice() {
        let mut store = NotificationStore::default();
        store.receive(vec![notification("n1", 0)]);
        assert_eq!(store.unread_count(), 1);

        assert!(store.mark_as_read("n1"));
        assert_eq!(store.unread_count(), 0);

        assert!(!store.mark_as_read("n1"));
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn unread_count_is_n_minus_m() {
        let mut store = NotificationStore::default();
        store.receive((0..6).map(|i| notification(&format!("n{i}"), i)).collect());
        for id in ["n1", "n3", "n3", "n5", "missing"] {
            store.mark_as_read(id);
        }
        assert_eq!(store.unread_count(), 6 - 3);
    }

    #[test]
    fn duplicate_ids_are_ignored_and_keep_read_state() {
        let mut store = NotificationStore::default();
        assert_eq!(store.receive(vec![notification("n1", 0), notification("n1", 0)]), 1);
        store.mark_as_read("n1");

        assert_eq!(store.receive(vec![notification("n1", 0)]), 0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn entries_stay_newest_first() {
        let mut store = NotificationStore::default();
        store.receive(vec![notification("b", 5), notification("a", 1)]);
        store.receive(vec![notification("c", 3), notification("d", 9)]);
        assert_eq!(ids(&store), vec!["d", "b", "c", "a"]);

        // mark-as-read no reordena
        store.mark_as_read("c");
        assert_eq!(ids(&store), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn mark_all_as_read_touches_only_unread() {
        let mut store = NotificationStore::default();
        store.receive(vec![notification("a", 1), notification("b", 2), notification("c", 3)]);
        store.mark_as_read("b");
        assert_eq!(store.mark_all_as_read(), 2);
        assert_eq!(store.unread_count(), 0);
        assert_eq!(store.mark_all_as_read(), 0);
    }

    #[test]
    fn generation_moves_only_on_new_entries() {
        let mut store = NotificationStore::default();
        store.apply(NotificationAction::Received {
            notifications: vec![notification("a", 1)],
            checked_at: at(2),
        });
        assert_eq!(store.generation(), 1);
        assert_eq!(store.last_checked(), Some(at(2)));

        store.apply(NotificationAction::Received {
            notifications: vec![notification("a", 1)],
            checked_at: at(3),
        });
        assert_eq!(store.generation(), 1);
        assert_eq!(store.last_checked(), Some(at(3)));
        assert_eq!(store.latest_arrivals().len(), 1);
    }

    #[test]
    fn native_alerts_only_for_fresh_unread_arrivals() {
        let mut store = NotificationStore::default();
        store.receive(vec![notification("old", 0), notification("fresh", 9), notification("seen", 9)]);
        store.mark_as_read("seen");

        let now = at(9) + Duration::seconds(30);
        let candidates: Vec<&str> = store
            .native_alert_candidates(now, Duration::seconds(60))
            .into_iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(candidates, vec!["fresh"]);
    }

    #[test]
    fn reducer_clear_resets_feed() {
        let store = Rc::new(NotificationStore::default()).reduce(NotificationAction::Received {
            notifications: vec![notification("a", 1)],
            checked_at: at(1),
        });
        let store = store.reduce(NotificationAction::Clear);
        assert!(store.is_empty());
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn badge_caps_at_nine() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(3).as_deref(), Some("3"));
        assert_eq!(badge_label(9).as_deref(), Some("9"));
        assert_eq!(badge_label(10).as_deref(), Some("9+"));
    }
}
