//! Session key lifecycle controller.
//!
//! `SessionKeyController` owns the in-memory view of session keys and
//! mediates every create/toggle/delete/share operation against the remote
//! service. Preconditions are checked against the cached listing before any
//! network call; the remote service stays the final authority, and after a
//! status mutation the full listing is re-fetched rather than patched
//! locally.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::api::ApiClient;
use crate::auth::AuthContext;
use crate::error::{Error, Result, ValidationError};
use crate::models::{ExpirationPolicy, SessionKey, ShareMode, ShareRequest};

/// An issued share link together with its effective expiration window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareGrant {
    pub login_url: String,
    /// Relative expiration in seconds; `0` means the link never expires.
    pub expires_in: i64,
}

/// A login URL intended for immediate one-shot navigation rather than
/// redistribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTarget {
    pub login_url: String,
}

pub struct SessionKeyController {
    client: ApiClient,
    auth: RwLock<Arc<AuthContext>>,
    keys: Vec<SessionKey>,
}

impl SessionKeyController {
    pub fn new(client: ApiClient, auth: AuthContext) -> Self {
        Self {
            client,
            auth: RwLock::new(Arc::new(auth)),
            keys: Vec::new(),
        }
    }

    /// The most recently fetched listing, in service order.
    pub fn keys(&self) -> &[SessionKey] {
        &self.keys
    }

    /// Snapshot of the current authentication context.
    ///
    /// Each operation takes one snapshot up front and uses it for both the
    /// service address and the bearer header, so a concurrent settings save
    /// cannot mix an old address with a new token mid-operation.
    pub fn auth(&self) -> Arc<AuthContext> {
        // A poisoned lock only ever holds a fully swapped Arc, so it is
        // safe to keep reading.
        match self.auth.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the authentication context as a single unit.
    pub fn replace_auth(&self, auth: AuthContext) {
        let auth = Arc::new(auth);
        match self.auth.write() {
            Ok(mut guard) => *guard = auth,
            Err(poisoned) => *poisoned.into_inner() = auth,
        }
    }

    fn request_client(&self, auth: &AuthContext) -> ApiClient {
        self.client.with_bearer(auth.bearer_token().map(str::to_string))
    }

    fn find_key(&self, id: u64) -> Result<&SessionKey> {
        self.keys
            .iter()
            .find(|k| k.id == id)
            .ok_or_else(|| Error::from(ValidationError::UnknownKey(id)))
    }

    /// Fetch the full listing from the service and replace the local view.
    pub async fn list_keys(&mut self) -> Result<&[SessionKey]> {
        let auth = self.auth();
        self.keys = self.request_client(&auth).list_session_keys().await?;
        debug!(count = self.keys.len(), "Refreshed session key listing");
        Ok(&self.keys)
    }

    /// Create a new key record with the given initial status and append the
    /// server-returned record to the local view.
    pub async fn create_key(
        &mut self,
        key: &str,
        code: &str,
        initial_status: bool,
    ) -> Result<SessionKey> {
        if key.trim().is_empty() {
            return Err(ValidationError::MissingField("key").into());
        }
        if code.trim().is_empty() {
            return Err(ValidationError::MissingField("code").into());
        }

        let auth = self.auth();
        let created = self
            .request_client(&auth)
            .create_session_key(key, code, initial_status)
            .await?;
        debug!(id = created.id, "Created session key");
        self.keys.push(created.clone());
        Ok(created)
    }

    /// Request the desired status for a key, then re-fetch the full listing.
    ///
    /// The service's view wins over local patching, so a rejected or
    /// modified change cannot leave the cache drifted. Requesting the
    /// current status is valid and harmless.
    pub async fn toggle_status(&mut self, id: u64, desired_status: bool) -> Result<()> {
        let auth = self.auth();
        let client = self.request_client(&auth);
        client.update_session_key_status(id, desired_status).await?;
        self.keys = client.list_session_keys().await?;
        Ok(())
    }

    /// Delete the key on the service, then drop it from the local view.
    ///
    /// This call is irreversible; any confirmation step happens in the
    /// caller before it is made.
    pub async fn delete_key(&mut self, id: u64) -> Result<()> {
        let auth = self.auth();
        self.request_client(&auth).delete_session_key(id).await?;
        self.keys.retain(|k| k.id != id);
        debug!(id, "Deleted session key");
        Ok(())
    }

    /// Issue a share link for an active key.
    ///
    /// Returns the opaque login URL and the effective expiration window so
    /// the caller can render remaining time. Every precondition failure is
    /// reported before any network call is attempted.
    pub async fn request_share_link(
        &self,
        id: u64,
        mode: &ShareMode,
        expiration: ExpirationPolicy,
    ) -> Result<ShareGrant> {
        let auth = self.auth();
        if !auth.validate() {
            return Err(ValidationError::MissingField("base_service_url").into());
        }

        let key = self.find_key(id)?;
        let request = ShareRequest::build(key, mode, expiration, auth.base_service_url())?;
        let login_url = self.request_client(&auth).issue_login_url(&request).await?;
        Ok(ShareGrant {
            login_url,
            expires_in: request.expires_in,
        })
    }

    /// Issue a login URL for immediate one-shot navigation.
    ///
    /// Equivalent to a normal share with no expiration, minus the
    /// expiration window in the result. The same active-key precondition
    /// applies.
    pub async fn request_direct_jump(&self, id: u64) -> Result<JumpTarget> {
        let grant = self
            .request_share_link(id, &ShareMode::Normal, ExpirationPolicy::Never)
            .await?;
        Ok(JumpTarget {
            login_url: grant.login_url,
        })
    }
}
