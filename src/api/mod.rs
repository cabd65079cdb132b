//! HTTP client for the Tidepool platform.
//!
//! The platform exposes three endpoints - auth, upload, and query - and
//! authenticates requests with an opaque session token carried in the
//! `x-tidepool-session-token` header. The token is obtained by logging in
//! with HTTP Basic credentials and may be rotated by any response.

pub mod client;
pub mod error;

pub use client::TidepoolClient;
pub use error::{AuthError, ConnectivityError, QueryError, UploadError};
