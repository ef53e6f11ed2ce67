use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Tipo de notificación. Valores desconocidos del backend caen en `Generic`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewBookingRequest,
    BookingApproved,
    BookingDenied,
    BookingDeleted,
    Info,
    Success,
    Warning,
    Error,
    #[serde(other)]
    Generic,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::NewBookingRequest => "📅",
            NotificationKind::BookingApproved | NotificationKind::Success => "✅",
            NotificationKind::BookingDenied | NotificationKind::Error => "❌",
            NotificationKind::BookingDeleted => "🗑️",
            NotificationKind::Warning => "⚠️",
            NotificationKind::Info | NotificationKind::Generic => "🔔",
        }
    }

    /// Clase CSS del borde en el panel
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::NewBookingRequest | NotificationKind::Info => "notification--info",
            NotificationKind::BookingApproved | NotificationKind::Success => "notification--success",
            NotificationKind::BookingDenied | NotificationKind::Error => "notification--error",
            NotificationKind::BookingDeleted | NotificationKind::Warning => "notification--warning",
            NotificationKind::Generic => "notification--generic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp,
            read: false,
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Registro tal como llega por el canal push/poll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl From<NotificationRecord> for Notification {
    fn from(record: NotificationRecord) -> Self {
        Self {
            id: record.id,
            kind: record.kind,
            title: record.title,
            message: record.message,
            timestamp: record.timestamp,
            read: false,
            data: record.data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Denied,
    #[serde(other)]
    Other,
}

/// Reserva de mentoría según `/auth/mentor/bookings/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub id: u64,
    pub mentee: String,
    #[serde(default)]
    pub mentor: Option<String>,
    pub day: NaiveDate,
    #[serde(default)]
    pub title: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kinds_map_to_generic() {
        let json = r#"{
            "id": "x1",
            "type": "course_published",
            "title": "New course",
            "message": "Leadership in Tech is live",
            "timestamp": "2024-01-20T10:00:00Z"
        }"#;
        let record: NotificationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, NotificationKind::Generic);

        let notification = Notification::from(record);
        assert!(!notification.read);
        assert_eq!(notification.id, "x1");
    }

    #[test]
    fn known_kinds_use_snake_case() {
        let kind: NotificationKind = serde_json::from_str("\"new_booking_request\"").unwrap();
        assert_eq!(kind, NotificationKind::NewBookingRequest);
        assert_eq!(
            serde_json::to_string(&NotificationKind::BookingDenied).unwrap(),
            "\"booking_denied\""
        );
    }

    #[test]
    fn booking_summary_parses_backend_payload() {
        let json = r#"{
            "id": 12,
            "mentor": "Dr. Emily Chen",
            "mentee": "Grace",
            "mentor_id": 3,
            "mentee_id": 9,
            "day": "2024-02-01",
            "time": "14:00:00",
            "title": "Career chat",
            "note": null,
            "status": "approved",
            "created_at": "2024-01-20T10:00:00Z",
            "updated_at": "2024-01-20T11:00:00Z",
            "meeting_batch": null,
            "google_meet_link": null
        }"#;
        let booking: BookingSummary = serde_json::from_str(json).unwrap();
        assert_eq!(booking.status, BookingStatus::Approved);
        assert_eq!(booking.mentee, "Grace");
    }
}
