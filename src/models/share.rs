//! Share link parameters and the wire payload for the issuance endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ValidationError;
use crate::models::SessionKey;
use crate::utils::expiry;

/// How an issued share link is namespaced.
///
/// Isolated shares with different labels derived from the same key are
/// independent authentication contexts on the remote service; the client
/// never deduplicates or caches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareMode {
    Normal,
    Isolated { unique_label: String },
}

/// How long an issued share link remains valid.
///
/// `Never` is carried on the wire as `expires_in = 0`; zero is reserved for
/// "no expiration" and is never offered as a literal zero-length window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationPolicy {
    Never,
    At(DateTime<Utc>),
}

/// Validated request payload for `POST /auth/oauth_token`.
///
/// `unique_name` is entirely absent for normal shares; its presence is what
/// the remote service uses to distinguish isolated issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub session_key_id: u64,
    pub base_url: String,
    pub expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
}

impl ShareRequest {
    /// Build a validated issuance payload for `key`.
    ///
    /// Checks run in order: the key must be active, an absolute expiration
    /// must be strictly in the future, and an isolation label must be
    /// non-empty after trimming.
    pub fn build(
        key: &SessionKey,
        mode: &ShareMode,
        expiration: ExpirationPolicy,
        service_base_url: &str,
    ) -> Result<Self, ValidationError> {
        if !key.is_active() {
            return Err(ValidationError::InactiveKey(key.id));
        }

        let expires_in = match expiration {
            ExpirationPolicy::Never => 0,
            ExpirationPolicy::At(instant) => {
                let seconds = expiry::seconds_until(instant);
                if seconds <= 0 {
                    return Err(ValidationError::ExpirationInPast);
                }
                seconds
            }
        };

        let unique_name = match mode {
            ShareMode::Normal => None,
            ShareMode::Isolated { unique_label } => {
                let trimmed = unique_label.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::EmptyIsolationLabel);
                }
                Some(trimmed.to_string())
            }
        };

        Ok(Self {
            session_key_id: key.id,
            base_url: service_base_url.to_string(),
            expires_in,
            unique_name,
        })
    }
}
