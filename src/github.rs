//! GitHub user profile lookup.
//!
//! One synchronous `GET {base}/users/{identifier}` per call. A 2xx reply is
//! parsed into a JSON object and returned verbatim; anything else becomes
//! [`FetchError::Api`] carrying the status and the body's `message` field.

use crate::config::Config;
use reqwest::Url;
use serde_json::{Map, Value};
use thiserror::Error;

/// Placeholder used when a failure body carries no `message`.
pub const NO_MESSAGE: &str = "No message";

/// Profile as returned by the API, keys and values untouched.
pub type UserProfile = Map<String, Value>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("identifier must name a single user")]
    InvalidIdentifier,

    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("GitHub API error - status code: {status}, message: {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status for `Api` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Raw reply as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP transports to allow mocking
pub trait HttpTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, FetchError>;
}

pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

pub struct GithubClient<T = ReqwestTransport> {
    base_url: Url,
    transport: T,
    verbose: bool,
}

impl GithubClient<ReqwestTransport> {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::from_config(&Config::default().with_api_url(base_url))
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let transport = ReqwestTransport::new(&config.user_agent)?;
        Self::with_transport(&config.api_base_url, transport)
    }
}

impl<T: HttpTransport> GithubClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self, FetchError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let url =
            Url::parse(trimmed).map_err(|_| FetchError::InvalidBaseUrl(base_url.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: url,
            transport,
            verbose: false,
        })
    }

    /// Log requests and statuses to stderr.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// URL for a user's profile. The identifier is encoded as a single path
    /// segment, so `/`, `?` and `#` stay inside it. Blank identifiers and the
    /// dot segments `.` and `..` are rejected since they cannot name a user.
    pub fn user_url(&self, identifier: &str) -> Result<Url, FetchError> {
        if identifier.trim().is_empty() || identifier == "." || identifier == ".." {
            return Err(FetchError::InvalidIdentifier);
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["users", identifier]);
        Ok(url)
    }

    pub fn fetch_user(&self, identifier: &str) -> Result<UserProfile, FetchError> {
        let url = self.user_url(identifier)?;
        if self.verbose {
            eprintln!("[github] GET {}", url);
        }

        let resp = self.transport.get(&url)?;
        if self.verbose {
            eprintln!("[github] {} ({} bytes)", resp.status, resp.body.len());
        }

        if !resp.is_success() {
            return Err(FetchError::Api {
                status: resp.status,
                message: error_message(&resp.body),
            });
        }

        Ok(serde_json::from_str(&resp.body)?)
    }
}

/// Extract `message` from an error body, or [`NO_MESSAGE`].
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| NO_MESSAGE.to_string())
}

/// The profile's `login` field, if present.
pub fn login(profile: &UserProfile) -> Option<&str> {
    profile.get("login").and_then(Value::as_str)
}

/// Fetch a profile using settings from the environment.
pub fn fetch_user(identifier: &str) -> Result<UserProfile, FetchError> {
    GithubClient::from_config(&Config::from_env())?.fetch_user(identifier)
}
