//! REST API client module for the session key management service.
//!
//! This module provides the `ApiClient` for the management endpoints:
//! the `/sessionkeys` CRUD surface and the `/auth/oauth_token` share-link
//! issuance endpoint.
//!
//! Requests carry an `Authorization: Bearer <token>` header when a token
//! is configured; without one the header is omitted entirely.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
