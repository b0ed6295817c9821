//! Domain model for session key records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A session key credential managed by the remote service.
///
/// The `id` is assigned by the service on creation. `key` and `code` are
/// set once at creation and never edited afterwards; only `status` changes,
/// through an explicit status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionKey {
    pub id: u64,
    pub key: String,
    pub code: String,
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SessionKey {
    /// Whether the key may be the subject of a jump or share operation.
    pub fn is_active(&self) -> bool {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_key_with_timestamps() {
        let json = r#"{"id":3,"key":"sk-abc","code":"c-123","status":true,"created_at":"2025-11-02T09:15:00Z","updated_at":"2025-11-03T10:00:00Z"}"#;
        let sk: SessionKey = serde_json::from_str(json).expect("Failed to parse session key JSON");
        assert_eq!(sk.id, 3);
        assert_eq!(sk.key, "sk-abc");
        assert_eq!(sk.code, "c-123");
        assert!(sk.is_active());
        assert!(sk.created_at.is_some());
    }

    #[test]
    fn test_parse_session_key_without_timestamps() {
        // Older records may omit timestamps entirely
        let json = r#"{"id":4,"key":"sk-def","code":"c-456","status":false}"#;
        let sk: SessionKey = serde_json::from_str(json).expect("Failed to parse session key JSON");
        assert!(!sk.is_active());
        assert!(sk.created_at.is_none());
        assert!(sk.updated_at.is_none());
    }
}
