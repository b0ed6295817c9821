//! Authentication context for outgoing requests.

/// The target service address and optional bearer credential used to stamp
/// management requests.
///
/// A context is replaced as a whole, never mutated field by field, so no
/// in-flight operation can observe an old address paired with a new token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    base_service_url: String,
    bearer_token: Option<String>,
}

impl AuthContext {
    /// Create a context. A blank bearer token is normalized to no token, so
    /// an empty placeholder can never be sent as an Authorization header.
    pub fn new(base_service_url: impl Into<String>, bearer_token: Option<String>) -> Self {
        Self {
            base_service_url: base_service_url.into(),
            bearer_token: bearer_token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// The service issued links point into, distinct from the management
    /// API endpoint used to administer keys.
    pub fn base_service_url(&self) -> &str {
        &self.base_service_url
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// A context is usable once a target service address is present. A
    /// missing bearer token is permitted; unauthenticated requests are left
    /// for the remote service to reject.
    pub fn validate(&self) -> bool {
        !self.base_service_url.trim().is_empty()
    }
}
