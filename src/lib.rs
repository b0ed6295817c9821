//! sharekey — client-side controller for session key credentials.
//!
//! This library manages session key records held by a remote authentication
//! service: listing, creating, activating/deactivating and deleting keys,
//! and deriving time-limited (optionally isolated) share links from active
//! keys. Rendering, clipboard access, and notification display belong to
//! the embedding application; the library returns tagged results it can
//! act on.

pub mod api;
pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use auth::{AuthContext, TokenStore};
pub use config::Settings;
pub use controller::{JumpTarget, SessionKeyController, ShareGrant};
pub use error::{Error, Result, ValidationError};
pub use models::{ExpirationPolicy, SessionKey, ShareMode, ShareRequest};
