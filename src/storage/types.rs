//! Core data types for the wish store
//!
//! - `Wish`: a single submitted message
//! - `WishId`: numeric or client-supplied identifier of a wish

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sender label used when the client does not identify itself
pub const UNKNOWN_SENDER: &str = "Unknown";

/// A single submitted message
///
/// Field order matches the persisted JSON layout: `text`, `timestamp`, `id`, `from`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wish {
    /// Message body, trimmed of surrounding whitespace
    pub text: String,
    /// Client-supplied timestamp, opaque to the server
    pub timestamp: String,
    /// Identifier (client-supplied or epoch millis at write time)
    pub id: WishId,
    /// Sender label taken from the request at write time
    #[serde(default = "default_sender")]
    pub from: String,
}

fn default_sender() -> String {
    UNKNOWN_SENDER.to_string()
}

impl Wish {
    /// Create a wish stamped with the current time as its id and an unknown sender
    pub fn new(text: impl AsRef<str>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.as_ref().trim().to_string(),
            timestamp: timestamp.into(),
            id: WishId::now(),
            from: default_sender(),
        }
    }

    /// Builder method: use a client-supplied id
    ///
    /// Unset ids (`0`, `""`, `false`, `null`) keep the generated one.
    pub fn id(mut self, id: WishId) -> Self {
        if !id.is_unset() {
            self.id = id;
        }
        self
    }

    /// Builder method: set the sender label
    ///
    /// An empty label keeps the default.
    pub fn sent_by(mut self, sender: impl Into<String>) -> Self {
        let sender = sender.into();
        if !sender.is_empty() {
            self.from = sender;
        }
        self
    }
}

/// Identifier of a wish
///
/// Clients may send any JSON value; it is kept exactly as sent.
/// Uniqueness is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum WishId {
    Number(serde_json::Number),
    Text(String),
    /// Booleans, objects and arrays
    Other(serde_json::Value),
}

impl WishId {
    /// Id derived from the current time in milliseconds since the Unix epoch
    pub fn now() -> Self {
        WishId::Number(Utc::now().timestamp_millis().into())
    }

    /// Numeric value of the id, if it has one
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            WishId::Number(n) => n.as_i64(),
            WishId::Text(_) | WishId::Other(_) => None,
        }
    }

    /// Whether the id carries no usable value (zero, empty string, `false`, `null`)
    pub fn is_unset(&self) -> bool {
        match self {
            WishId::Number(n) => n.as_f64().map(|v| v == 0.0).unwrap_or(false),
            WishId::Text(s) => s.is_empty(),
            WishId::Other(v) => {
                matches!(v, serde_json::Value::Null | serde_json::Value::Bool(false))
            }
        }
    }
}

impl From<i64> for WishId {
    fn from(value: i64) -> Self {
        WishId::Number(value.into())
    }
}

impl From<&str> for WishId {
    fn from(value: &str) -> Self {
        WishId::Text(value.to_string())
    }
}

impl fmt::Display for WishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WishId::Number(n) => write!(f, "{}", n),
            WishId::Text(s) => write!(f, "{}", s),
            WishId::Other(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wish_trims_text() {
        let wish = Wish::new("  hello  ", "2024-01-01T00:00:00Z");
        assert_eq!(wish.text, "hello");
        assert_eq!(wish.timestamp, "2024-01-01T00:00:00Z");
        assert_eq!(wish.from, UNKNOWN_SENDER);
    }

    #[test]
    fn test_default_id_is_now_in_millis() {
        let before = Utc::now().timestamp_millis();
        let wish = Wish::new("hi", "t");
        let after = Utc::now().timestamp_millis();

        let id = wish.id.as_i64().unwrap();
        assert!(id >= before && id <= after);
    }

    #[test]
    fn test_unset_ids_keep_generated() {
        let wish = Wish::new("hi", "t").id(WishId::from(0i64));
        assert!(wish.id.as_i64().unwrap() > 0);

        let wish = Wish::new("hi", "t").id(WishId::from(""));
        assert!(matches!(wish.id, WishId::Number(_)));

        let wish = Wish::new("hi", "t").id(WishId::Other(serde_json::Value::Bool(false)));
        assert!(wish.id.as_i64().unwrap() > 0);
    }

    #[test]
    fn test_explicit_id_preserved() {
        let wish = Wish::new("hi", "t").id(WishId::from(42i64));
        assert_eq!(wish.id, WishId::from(42i64));

        let wish = Wish::new("hi", "t").id(WishId::from("abc"));
        assert_eq!(wish.id, WishId::from("abc"));
    }

    #[test]
    fn test_empty_sender_keeps_default() {
        let wish = Wish::new("hi", "t").sent_by("");
        assert_eq!(wish.from, UNKNOWN_SENDER);

        let wish = Wish::new("hi", "t").sent_by("iPhone");
        assert_eq!(wish.from, "iPhone");
    }

    #[test]
    fn test_json_layout() {
        let wish = Wish::new("Happy Birthday!", "2024-01-01T00:00:00Z").id(WishId::from(7i64));
        let json = serde_json::to_string(&wish).unwrap();
        assert_eq!(
            json,
            r#"{"text":"Happy Birthday!","timestamp":"2024-01-01T00:00:00Z","id":7,"from":"Unknown"}"#
        );
    }

    #[test]
    fn test_id_kinds_deserialize() {
        let wish: Wish =
            serde_json::from_str(r#"{"text":"a","timestamp":"b","id":1704067200000.5,"from":"x"}"#)
                .unwrap();
        assert_eq!(wish.id.to_string(), "1704067200000.5");

        let wish: Wish =
            serde_json::from_str(r#"{"text":"a","timestamp":"b","id":"w-1"}"#).unwrap();
        assert_eq!(wish.id, WishId::from("w-1"));
        assert_eq!(wish.from, UNKNOWN_SENDER);

        let wish: Wish =
            serde_json::from_str(r#"{"text":"a","timestamp":"b","id":{"n":1}}"#).unwrap();
        assert_eq!(wish.id, WishId::Other(serde_json::json!({"n": 1})));
        assert_eq!(wish.id.to_string(), r#"{"n":1}"#);
    }
}
