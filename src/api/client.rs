//! Session client for the Tidepool platform.
//!
//! This module provides the `TidepoolClient` struct for logging in,
//! uploading data blocks, and running queries under a platform session
//! token.

use reqwest::{header, Client, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, info};

use crate::auth::Session;
use crate::config::Endpoints;

use super::error::{AuthError, ConnectivityError, QueryError, UploadError};

/// Request/response header carrying the platform session token.
pub const SESSION_TOKEN_HEADER: &str = "x-tidepool-session-token";

/// Client for the Tidepool platform.
///
/// Owns the session state; operations take `&mut self` because any response
/// may replace the stored token. Not meant for concurrent use - the mutable
/// borrow keeps requests one at a time.
pub struct TidepoolClient {
    http: Client,
    endpoints: Endpoints,
    session: Session,
}

impl TidepoolClient {
    /// Create an unauthenticated client for the given endpoint set.
    pub fn new(endpoints: Endpoints) -> reqwest::Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            endpoints,
            session: Session::default(),
        })
    }

    /// Current session token, empty until a login succeeds.
    pub fn token(&self) -> &str {
        self.session.token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Log in with HTTP Basic credentials and store the issued session token.
    ///
    /// The password is used for this one request and not retained.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let url = format!("{}/login", self.endpoints.auth);
        let response = self
            .http
            .post(&url)
            .basic_auth(username, Some(password))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AuthError::Rejected(status));
        }

        let token = response_token(&response)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;
        self.session.establish(username, &token);
        info!(user = %username, "session established");
        Ok(())
    }

    /// End the session and clear the stored token.
    ///
    /// The platform treats a login with an empty password as the logout
    /// gesture for the named account.
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        let url = format!("{}/login", self.endpoints.auth);
        let response = self
            .http
            .post(&url)
            .basic_auth(self.session.username(), Some(""))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AuthError::Rejected(status));
        }
        self.session.clear();
        info!("session cleared");
        Ok(())
    }

    /// Check platform availability. Succeeds only on HTTP 200.
    pub async fn ping(&self) -> Result<(), ConnectivityError> {
        let url = format!("{}/status", self.endpoints.auth);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ConnectivityError::UnexpectedStatus(status));
        }
        Ok(())
    }

    /// Upload a block of opaque JSON items as a single array.
    ///
    /// The current token is attached even when empty (before login); the
    /// platform rejects such requests server-side.
    pub async fn upload(&mut self, items: &[Value]) -> Result<(), UploadError> {
        debug!(count = items.len(), "uploading data blocks");
        let response = self
            .http
            .post(&self.endpoints.upload)
            .header(SESSION_TOKEN_HEADER, self.session.token())
            .json(items)
            .send()
            .await?;

        self.adopt_rotated_token(&response);

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Rejected(status));
        }
        Ok(())
    }

    /// Run a raw query payload against the platform and return the matching
    /// rows.
    pub async fn query(&mut self, query: &str) -> Result<Vec<Value>, QueryError> {
        debug!(%query, "running platform query");
        let response = self
            .http
            .post(&self.endpoints.query)
            .header(SESSION_TOKEN_HEADER, self.session.token())
            .header(header::CONTENT_TYPE, "application/json")
            .body(query.to_owned())
            .send()
            .await?;

        self.adopt_rotated_token(&response);

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Rejected(status));
        }

        let body = response.text().await?;
        let rows: Vec<Value> = serde_json::from_str(&body)?;
        Ok(rows)
    }

    /// Adopt a replacement token when a response carries one that differs
    /// from the stored token. The platform rotates tokens silently.
    fn adopt_rotated_token(&mut self, response: &Response) {
        if let Some(token) = response_token(response) {
            if !token.is_empty() && self.session.adopt_token(&token) {
                debug!("adopted rotated session token");
            }
        }
    }
}

fn response_token(response: &Response) -> Option<String> {
    response
        .headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
