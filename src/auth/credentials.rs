use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_NAME: &str = "sharekey";

/// Stores the management API bearer token in the OS keychain, keyed by the
/// management endpoint URL so separate deployments keep separate tokens.
pub struct TokenStore;

impl TokenStore {
    /// Store the bearer token for a management endpoint in the OS keychain
    pub fn store(manage_url: &str, token: &str) -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, manage_url)
            .context("Failed to create keyring entry")?;
        entry
            .set_password(token)
            .context("Failed to store bearer token in keychain")?;
        Ok(())
    }

    /// Retrieve the bearer token for a management endpoint from the OS keychain
    pub fn get(manage_url: &str) -> Result<String> {
        let entry = Entry::new(SERVICE_NAME, manage_url)
            .context("Failed to create keyring entry")?;
        entry
            .get_password()
            .context("Failed to retrieve bearer token from keychain")
    }

    /// Delete the stored bearer token for a management endpoint
    pub fn delete(manage_url: &str) -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, manage_url)
            .context("Failed to create keyring entry")?;
        entry
            .delete_credential()
            .context("Failed to delete bearer token from keychain")?;
        Ok(())
    }

    /// Check if a bearer token is stored for a management endpoint
    pub fn has_token(manage_url: &str) -> bool {
        if let Ok(entry) = Entry::new(SERVICE_NAME, manage_url) {
            entry.get_password().is_ok()
        } else {
            false
        }
    }
}
