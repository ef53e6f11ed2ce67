// ============================================================================
// NOTIFICATION SERVICE - Canal de notificaciones (poll)
// ============================================================================
// El backend no tiene endpoint de notificaciones: se derivan de las reservas
// recientes del mentor. Solo HTTP + conversión, el estado vive en el store.
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{BookingStatus, BookingSummary, Notification, NotificationKind, NotificationRecord};
use crate::services::auth_service::error_message_from_body;

/// Consulta las reservas y las convierte en notificaciones
pub async fn fetch_notifications(access_token: &str, now: DateTime<Utc>) -> Result<Vec<Notification>, ApiError> {
    let url = format!("{}/auth/mentor/bookings/", CONFIG.api_url());

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Http {
            status,
            message: error_message_from_body(&body, "Failed to fetch notifications"),
        });
    }

    let bookings = response
        .json::<Vec<BookingSummary>>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    let window = Duration::minutes(CONFIG.notifications.booking_window_minutes);
    Ok(notifications_from_bookings(&bookings, now, window))
}

/// Decodifica un lote recibido por push (`[{id, type, title, message, timestamp}]`)
pub fn parse_push_batch(payload: &str) -> Result<Vec<Notification>, ApiError> {
    serde_json::from_str::<Vec<NotificationRecord>>(payload)
        .map(|records| records.into_iter().map(Notification::from).collect())
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Reservas -> notificaciones, más recientes primero.
/// - pendiente creada dentro de la ventana: solicitud nueva
/// - actualizada dentro de la ventana, después de crearse y ya resuelta: aprobada/denegada
pub fn notifications_from_bookings(
    bookings: &[BookingSummary],
    now: DateTime<Utc>,
    window: Duration,
) -> Vec<Notification> {
    let since = now - window;
    let mut notifications = Vec::new();

    for booking in bookings {
        let payload = serde_json::json!({
            "bookingId": booking.id,
            "mentee": booking.mentee,
        });

        if booking.created_at > since && booking.status == BookingStatus::Pending {
            notifications.push(
                Notification::new(
                    format!("new_booking_{}", booking.id),
                    NotificationKind::NewBookingRequest,
                    "New Booking Request",
                    format!(
                        "{} has requested a session for {}",
                        booking.mentee,
                        booking.day.format("%d/%m/%Y")
                    ),
                    booking.created_at,
                )
                .with_data(payload.clone()),
            );
        }

        if booking.updated_at > since
            && booking.updated_at > booking.created_at
            && booking.status != BookingStatus::Pending
        {
            let approved = booking.status == BookingStatus::Approved;
            let (kind, title, verb) = if approved {
                (NotificationKind::BookingApproved, "Booking Approved", "approved")
            } else {
                (NotificationKind::BookingDenied, "Booking Denied", "denied")
            };
            let mut data = payload;
            data["status"] = serde_json::json!(if approved { "approved" } else { "denied" });

            notifications.push(
                Notification::new(
                    format!("status_change_{}", booking.id),
                    kind,
                    title,
                    format!("You {} {}'s booking request", verb, booking.mentee),
                    booking.updated_at,
                )
                .with_data(data),
            );
        }
    }

    notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    notifications
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn booking(id: u64, status: BookingStatus, created_mins_ago: i64, updated_mins_ago: i64) -> BookingSummary {
        BookingSummary {
            id,
            mentee: "Grace".to_string(),
            mentor: Some("Dr. Emily Chen".to_string()),
            day: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            title: None,
            status,
            created_at: now() - Duration::minutes(created_mins_ago),
            updated_at: now() - Duration::minutes(updated_mins_ago),
        }
    }

    #[test]
    fn recent_pending_booking_becomes_request() {
        let out = notifications_from_bookings(&[booking(1, BookingStatus::Pending, 10, 10)], now(), Duration::hours(1));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "new_booking_1");
        assert_eq!(out[0].kind, NotificationKind::NewBookingRequest);
        assert_eq!(out[0].message, "Grace has requested a session for 05/03/2024");
        assert!(!out[0].read);
    }

    #[test]
    fn resolved_bookings_become_status_changes() {
        let out = notifications_from_bookings(
            &[
                booking(2, BookingStatus::Approved, 120, 5),
                booking(3, BookingStatus::Denied, 30, 20),
            ],
            now(),
            Duration::hours(1),
        );
        let ids: Vec<&str> = out.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["status_change_2", "status_change_3"]);
        assert_eq!(out[0].kind, NotificationKind::BookingApproved);
        assert_eq!(out[1].kind, NotificationKind::BookingDenied);
        assert_eq!(out[1].message, "You denied Grace's booking request");
        assert_eq!(out[1].data.as_ref().unwrap()["status"], "denied");
    }

    #[test]
    fn stale_or_untouched_bookings_are_skipped() {
        let out = notifications_from_bookings(
            &[
                booking(4, BookingStatus::Pending, 90, 90),
                booking(5, BookingStatus::Approved, 200, 120),
                // creada y "actualizada" a la vez: no es un cambio de estado
                booking(6, BookingStatus::Approved, 10, 10),
            ],
            now(),
            Duration::hours(1),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn push_batch_accepts_unknown_types() {
        let batch = parse_push_batch(
            r#"[{"id": "p1", "type": "forum_reply", "title": "Reply", "message": "New reply", "timestamp": "2024-03-01T11:59:00Z"}]"#,
        )
        .unwrap();
        assert_eq!(batch[0].kind, NotificationKind::Generic);
        assert!(parse_push_batch("{}").is_err());
    }
}
