// ============================================================================
// NOTIFICATION BELL - Badge de no leídas + panel desplegable
// ============================================================================

use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::hooks::use_notifications;
use crate::models::{Notification, NotificationKind};
use crate::services::navigate;
use crate::stores::badge_label;

const BOOKINGS_ROUTE: &str = "/mentor-bookings";

#[function_component(NotificationBell)]
pub fn notification_bell() -> Html {
    let handle = use_notifications();
    let is_open = use_state(|| false);

    let unread = handle.feed.unread_count();
    let badge = badge_label(unread);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let on_mark_all = {
        let mark_all = handle.mark_all_as_read.clone();
        Callback::from(move |_: MouseEvent| mark_all.emit(()))
    };

    let now = Utc::now();
    let items = handle.feed.notifications().iter().map(|notification| {
        let onclick = {
            let mark_as_read = handle.mark_as_read.clone();
            let is_open = is_open.clone();
            let id = notification.id.clone();
            let kind = notification.kind;
            Callback::from(move |_: MouseEvent| {
                mark_as_read.emit(id.clone());
                if kind == NotificationKind::NewBookingRequest {
                    is_open.set(false);
                    navigate(BOOKINGS_ROUTE);
                }
            })
        };
        notification_item(notification, now, onclick)
    });

    html! {
        <div class="notification-bell">
            <button type="button" class="bell-button" onclick={toggle} aria-label="Notifications">
                <span class="bell-icon">{"🔔"}</span>
                if let Some(label) = badge {
                    <span class="bell-badge">{label}</span>
                }
            </button>

            if *is_open {
                <div class="notification-panel">
                    <div class="notification-panel__header">
                        <h3>{"Notifications"}</h3>
                        if unread > 0 {
                            <button type="button" class="btn-link" onclick={on_mark_all}>
                                {"Mark all as read"}
                            </button>
                        }
                    </div>
                    if handle.feed.is_empty() {
                        <p class="notification-panel__empty">{"No notifications yet"}</p>
                    } else {
                        <ul class="notification-list">{ for items }</ul>
                    }
                </div>
            }
        </div>
    }
}

fn notification_item(notification: &Notification, now: DateTime<Utc>, onclick: Callback<MouseEvent>) -> Html {
    let class = classes!(
        "notification",
        notification.kind.css_class(),
        (!notification.read).then_some("notification--unread")
    );

    html! {
        <li key={notification.id.clone()} class={class} {onclick}>
            <span class="notification__icon">{notification.kind.icon()}</span>
            <div class="notification__body">
                <strong>{notification.title.clone()}</strong>
                <p>{notification.message.clone()}</p>
                <small>{time_ago(notification.timestamp, now)}</small>
            </div>
        </li>
    }
}

/// "Just now", "5m ago", "3h ago", "2d ago"
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    if elapsed.num_minutes() < 1 {
        "Just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    #[rstest]
    #[case(Duration::seconds(20), "Just now")]
    #[case(Duration::minutes(5), "5m ago")]
    #[case(Duration::minutes(59), "59m ago")]
    #[case(Duration::hours(3), "3h ago")]
    #[case(Duration::days(2), "2d ago")]
    fn time_ago_buckets(#[case] elapsed: Duration, #[case] expected: &str) {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(time_ago(now - elapsed, now), expected);
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(time_ago(now + Duration::minutes(3), now), "Just now");
    }
}
