//! Opaque event payloads.
//!
//! Handlers receive whatever the widget that raised the event chose to send.
//! The registry performs no validation; the accessors here never panic and
//! never error, they just come back empty when the shape does not match.

use std::fmt;

use serde_json::Value;

/// Untyped payload attached to a triggered event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPayload {
    value: Option<Value>,
}

impl EventPayload {
    /// Payload carrying no data at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self { value: Some(value) }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// String field lookup; `None` for absent keys, non-string values and
    /// non-object payloads alike.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key)?.as_str()
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.str_field("text")
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.str_field("message")
    }

    /// External identifier of the presentation target: `targetId`, falling
    /// back to the legacy `componentId` key.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        self.str_field("targetId")
            .or_else(|| self.str_field("componentId"))
    }

    /// Copy of the payload with `message` set, preserving the other fields.
    /// Non-object payloads are replaced by a fresh object.
    #[must_use]
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        let mut object = match &self.value {
            Some(Value::Object(map)) => map.clone(),
            _ => serde_json::Map::new(),
        };

        object.insert("message".to_string(), Value::String(message.into()));

        Self {
            value: Some(Value::Object(object)),
        }
    }
}

impl From<Value> for EventPayload {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl fmt::Display for EventPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("<empty>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accessors_tolerate_missing_and_mistyped_fields() {
        let payload = EventPayload::from_value(json!({ "text": 42, "other": "x" }));

        assert_eq!(payload.text(), None);
        assert_eq!(payload.message(), None);
        assert_eq!(payload.str_field("other"), Some("x"));

        let empty = EventPayload::empty();
        assert_eq!(empty.target_id(), None);
        assert!(empty.is_empty());

        let scalar = EventPayload::from_value(json!("just a string"));
        assert_eq!(scalar.str_field("anything"), None);
    }

    #[test]
    fn target_id_falls_back_to_component_id() {
        let modern = EventPayload::from_value(json!({ "targetId": "panel-1" }));
        let legacy = EventPayload::from_value(json!({ "componentId": "panel-2" }));
        let both = EventPayload::from_value(json!({
            "targetId": "wins",
            "componentId": "loses",
        }));

        assert_eq!(modern.target_id(), Some("panel-1"));
        assert_eq!(legacy.target_id(), Some("panel-2"));
        assert_eq!(both.target_id(), Some("wins"));
    }

    #[test]
    fn with_message_preserves_existing_fields() {
        let payload = EventPayload::from_value(json!({ "targetId": "panel-1" }));
        let updated = payload.with_message("hello");

        assert_eq!(updated.message(), Some("hello"));
        assert_eq!(updated.target_id(), Some("panel-1"));
        // Source payload untouched.
        assert_eq!(payload.message(), None);

        let from_scalar = EventPayload::from_value(json!(7)).with_message("fresh");
        assert_eq!(from_scalar.message(), Some("fresh"));
    }
}
