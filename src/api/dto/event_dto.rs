//! Event DTOs: write, listing and count bodies.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Event;

/// Query string for `GET /add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddEventParams {
    /// Message to store. Defaults to `"hello"` when absent.
    pub message: Option<String>,
}

impl AddEventParams {
    /// Picks the first `message` pair; repeated keys and unknown keys
    /// are ignored.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let message = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "message").then_some(value));
        Self { message }
    }
}

/// Response body for `GET /add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AddEventResponse {
    /// Always `"added"`.
    pub status: String,
    /// ISO-8601 UTC timestamp assigned to the event.
    pub timestamp: String,
    /// Message as stored.
    pub message: String,
}

impl From<Event> for AddEventResponse {
    fn from(event: Event) -> Self {
        Self {
            status: "added".to_string(),
            timestamp: event.timestamp,
            message: event.message,
        }
    }
}

/// One entry of the `GET /consultation` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    /// Store-assigned identifier.
    pub id: i64,
    /// ISO-8601 UTC timestamp.
    pub timestamp: String,
    /// Stored message.
    pub message: String,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            timestamp: event.timestamp,
            message: event.message,
        }
    }
}

/// Response body for `GET /count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    /// Total number of stored events.
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn first_message_wins() {
        let params = AddEventParams::from_pairs(pairs(&[
            ("other", "x"),
            ("message", "a"),
            ("message", "b"),
        ]));
        assert_eq!(params.message.as_deref(), Some("a"));
    }

    #[test]
    fn missing_message_is_none() {
        let params = AddEventParams::from_pairs(pairs(&[("other", "x")]));
        assert_eq!(params, AddEventParams::default());
    }

    #[test]
    fn add_response_field_order_is_stable() {
        let body = AddEventResponse::from(Event {
            id: 1,
            timestamp: "2024-01-01T00:00:00.000000Z".to_string(),
            message: "hola".to_string(),
        });
        let json = serde_json::to_string(&body).unwrap_or_default();
        assert_eq!(
            json,
            r#"{"status":"added","timestamp":"2024-01-01T00:00:00.000000Z","message":"hola"}"#
        );
    }

    #[test]
    fn event_dto_serializes_id_as_number() {
        let dto = EventDto::from(Event {
            id: 42,
            timestamp: "t".to_string(),
            message: "m".to_string(),
        });
        let json = serde_json::to_string(&dto).unwrap_or_default();
        assert_eq!(json, r#"{"id":42,"timestamp":"t","message":"m"}"#);
    }
}
