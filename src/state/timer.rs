//! Timer record exchanged with the backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The singleton countdown target as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    /// Backend identifier, never used for addressing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub target_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Timer {
    /// Create a timer without backend metadata
    pub fn new(name: impl Into<String>, target_date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: name.into(),
            target_date,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerPayload {
    pub name: String,
    pub target_date: DateTime<Utc>,
}

impl From<TimerPayload> for Timer {
    fn from(payload: TimerPayload) -> Self {
        Timer::new(payload.name, payload.target_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deserializes_backend_record_with_metadata() {
        let json = r#"{
            "id": "65f1c2",
            "name": "Demo",
            "targetDate": "2999-01-01T00:00:00Z",
            "createdAt": "2024-05-01T10:00:00.123Z",
            "updatedAt": null
        }"#;

        let timer: Timer = serde_json::from_str(json).unwrap();
        assert_eq!(timer.name, "Demo");
        assert_eq!(timer.target_date, Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(timer.id.as_deref(), Some("65f1c2"));
        assert!(timer.created_at.is_some());
        assert!(timer.updated_at.is_none());
    }

    #[test]
    fn payload_uses_camel_case_iso_timestamp() {
        let payload = TimerPayload {
            name: "Launch Event".to_string(),
            target_date: Utc.with_ymd_and_hms(2030, 6, 1, 12, 30, 0).unwrap(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["name"], "Launch Event");
        assert_eq!(value["targetDate"], "2030-06-01T12:30:00Z");
    }
}
