//! Endpoint selection for the Tidepool platform.
//!
//! The platform runs in four deployment environments; each one hosts the
//! auth, upload, and query services under fixed path suffixes on a single
//! base host. The endpoint set is chosen once at startup and never changes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const LOCAL_HOST: &str = "http://localhost:8009";
const DEVEL_HOST: &str = "https://devel-api.tidepool.io";
const STAGING_HOST: &str = "https://staging-api.tidepool.io";
const PROD_HOST: &str = "https://api.tidepool.io";

const AUTH_PATH: &str = "/auth";
const UPLOAD_PATH: &str = "/data";
const QUERY_PATH: &str = "/query";

/// Platform deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Devel,
    Staging,
    Prod,
}

impl Environment {
    fn host(self) -> &'static str {
        match self {
            Environment::Local => LOCAL_HOST,
            Environment::Devel => DEVEL_HOST,
            Environment::Staging => STAGING_HOST,
            Environment::Prod => PROD_HOST,
        }
    }
}

/// The three base URLs the client talks to. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub auth: String,
    pub upload: String,
    pub query: String,
}

impl Endpoints {
    pub fn for_environment(environment: Environment) -> Self {
        Self::with_host(environment.host())
    }

    /// Build the endpoint set on an arbitrary host, keeping the platform's
    /// fixed path suffixes. Used for the `TIDEPOOL_SERVER_URL` override.
    pub fn with_host(host: &str) -> Self {
        let host = host.trim_end_matches('/');
        Self {
            auth: format!("{host}{AUTH_PATH}"),
            upload: format!("{host}{UPLOAD_PATH}"),
            query: format!("{host}{QUERY_PATH}"),
        }
    }
}
