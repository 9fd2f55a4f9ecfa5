use crate::island::config::AppConfig;
use crate::island::types::{ActionReply, Agent, LoginReply, LoginRequest, ResetAction};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Could not connect to the Island: {0}")]
    Connection(String),
    #[error("Request to the Island timed out")]
    Timeout,
    #[error("Not authorized by the Island")]
    Unauthorized,
    #[error("Island refused the request (HTTP {status})")]
    Request { status: u16 },
    #[error("Island failed to handle the request (HTTP {status})")]
    RequestFailed { status: u16 },
    #[error("Unexpected response from the Island (HTTP {status})")]
    UnexpectedStatus { status: u16 },
    #[error("Malformed response from the Island: {0}")]
    Decode(String),
    #[error("Island reported status \"{status}\"")]
    Rejected { status: String },
    #[error("Invalid Island URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_connect() {
            ApiError::Connection(e.to_string())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Http(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Authenticated access to the Island management API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IslandApi: Send + Sync {
    /// Triggers `action` and returns the reply body as sent by the Island.
    async fn run_action(&self, action: ResetAction) -> Result<ActionReply>;

    async fn agents(&self) -> Result<Vec<Agent>>;
}

/// Handle shared with components through the Dioxus context.
pub type SharedIslandApi = Arc<dyn IslandApi>;

/// Maps an HTTP status to the error it represents, if any.
/// 4xx are request errors, 5xx are server-side failures.
pub fn classify_status(status: StatusCode) -> Option<ApiError> {
    if status.is_success() {
        return None;
    }

    let code = status.as_u16();
    let err = if status == StatusCode::UNAUTHORIZED {
        ApiError::Unauthorized
    } else if status.is_client_error() {
        ApiError::Request { status: code }
    } else if status.is_server_error() {
        ApiError::RequestFailed { status: code }
    } else {
        ApiError::UnexpectedStatus { status: code }
    };
    Some(err)
}

fn endpoint(base: &Url, path: &str) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path)
        .map_err(|e| ApiError::InvalidUrl(e.to_string()))
}

pub fn action_url(base: &Url, action: ResetAction) -> Result<Url> {
    let mut url = endpoint(base, "api")?;
    url.query_pairs_mut().append_pair("action", action.as_query());
    Ok(url)
}

pub fn agents_url(base: &Url) -> Result<Url> {
    endpoint(base, "api/agents")
}

pub fn login_url(base: &Url) -> Result<Url> {
    endpoint(base, "api/auth")
}

/// Link to the Island's configuration page, offered before a full reset.
pub fn configure_page_url(base: &Url) -> Result<Url> {
    endpoint(base, "configure")
}

#[derive(Clone, Debug)]
struct Credentials {
    username: String,
    password: String,
}

pub struct IslandClient {
    http: Client,
    base_url: Url,
    credentials: Option<Credentials>,
    token: Mutex<Option<String>>,
}

impl IslandClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base_url =
            Url::parse(&config.server_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let mut builder = Client::builder()
            .user_agent(concat!("island-console/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(config.accepts_invalid_certs());
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        let credentials = match (&config.username, &config.password) {
            (Some(username), Some(password)) => Some(Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        };

        Ok(Self {
            http,
            base_url,
            credentials,
            token: Mutex::new(config.token.clone()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn login(&self, credentials: &Credentials) -> Result<String> {
        let url = login_url(&self.base_url)?;
        debug!(%url, user = %credentials.username, "logging in to island");

        let response = self
            .http
            .post(url)
            .json(&LoginRequest {
                username: &credentials.username,
                password: &credentials.password,
            })
            .send()
            .await?;

        if let Some(err) = classify_status(response.status()) {
            warn!(error = %err, "island login failed");
            return Err(err);
        }

        let reply: LoginReply = response.json().await?;
        Ok(reply.access_token)
    }

    async fn bearer_token(&self) -> Result<Option<String>> {
        let mut token = self.token.lock().await;
        if let Some(existing) = token.as_ref() {
            return Ok(Some(existing.clone()));
        }

        let Some(credentials) = &self.credentials else {
            return Ok(None);
        };

        let fresh = self.login(credentials).await?;
        *token = Some(fresh.clone());
        Ok(Some(fresh))
    }

    /// Drops a rejected token so the next request logs in again.
    /// A configured token without credentials is kept, nothing could replace it.
    async fn forget_token(&self) {
        if self.credentials.is_some() {
            *self.token.lock().await = None;
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");

        let mut request = self.http.get(url);
        if let Some(token) = self.bearer_token().await? {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if let Some(err) = classify_status(response.status()) {
            if matches!(err, ApiError::Unauthorized) {
                self.forget_token().await;
            }
            return Err(err);
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl IslandApi for IslandClient {
    async fn run_action(&self, action: ResetAction) -> Result<ActionReply> {
        let url = action_url(&self.base_url, action)?;
        self.get_json(url).await
    }

    async fn agents(&self) -> Result<Vec<Agent>> {
        let url = agents_url(&self.base_url)?;
        self.get_json(url).await
    }
}
