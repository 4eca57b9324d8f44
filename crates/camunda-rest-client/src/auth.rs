//! Authentication and credential resolution for the Camunda client

use std::env;
use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::{debug, warn};

/// Environment variable checked during credential resolution.
pub const CREDENTIALS_ENV_VAR: &str = "CAMUNDA_CLIENT";

/// File name checked in the working directory during credential resolution.
pub const CREDENTIALS_FILE: &str = "camunda_client";

/// Authentication methods supported by the engine
#[derive(Debug, Clone)]
pub enum AuthMethod {
    /// HTTP basic authentication (`Authorization: Basic <base64>`)
    Basic { username: String, password: String },
    /// No authentication
    None,
}

impl Default for AuthMethod {
    fn default() -> Self {
        Self::None
    }
}

impl AuthMethod {
    /// Create basic authentication from a username/password pair
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Resolve credentials from the running environment.
    ///
    /// Sources are checked in order: the `CAMUNDA_CLIENT` environment
    /// variable, then a `camunda_client` file in the working
    /// directory. Either holds a single `username:password` line.
    /// Malformed values are skipped with a warning; if nothing
    /// resolves the client proceeds unauthenticated.
    pub fn resolve() -> Self {
        Self::resolve_from(CREDENTIALS_ENV_VAR, Path::new(CREDENTIALS_FILE))
    }

    fn resolve_from(env_var: &str, file: &Path) -> Self {
        if let Ok(value) = env::var(env_var) {
            debug!("environment variable set, reading credentials");
            match parse_credentials(&value) {
                Some((username, password)) => return Self::Basic { username, password },
                None => warn!("credentials in ${env_var} malformed, skipping"),
            }
        }

        if file.is_file() {
            debug!("credentials file exists, reading credentials");
            match fs::read_to_string(file) {
                Ok(contents) => match parse_credentials(&contents) {
                    Some((username, password)) => return Self::Basic { username, password },
                    None => warn!("credentials file value malformed, skipping"),
                },
                Err(err) => warn!("failed to read credentials file: {err}"),
            }
        }

        warn!("no credentials found");
        Self::None
    }

    /// Apply authentication headers to a request
    pub fn apply_to_headers(
        &self,
        headers: &mut HeaderMap,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match self {
            AuthMethod::Basic { username, password } => {
                let token = STANDARD.encode(format!("{username}:{password}"));
                headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Basic {token}"))?);
            }
            AuthMethod::None => {
                // No headers to add
            }
        }
        Ok(())
    }

    /// Get headers for this authentication method
    pub fn headers(&self) -> Result<HeaderMap, Box<dyn std::error::Error + Send + Sync>> {
        let mut headers = HeaderMap::new();
        self.apply_to_headers(&mut headers)?;
        Ok(headers)
    }
}

fn parse_credentials(raw: &str) -> Option<(String, String)> {
    let (username, password) = raw.trim().split_once(':')?;
    let username = username.trim();
    if username.is_empty() {
        return None;
    }
    Some((username.to_string(), password.trim().to_string()))
}
