//! Client for the Dexcom Share web service.
//!
//! This module provides the `ShareClient` struct for the two-step login
//! exchange and for fetching recent glucose readings.

use std::fmt;
use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::error::{truncate_body, ShareError};
use crate::auth::{session, Session};
use crate::config::ShareConfig;
use crate::models::{GlucoseReading, RawGlucoseReading};

// ============================================================================
// Constants
// ============================================================================

/// Credential verification endpoint; returns the opaque account identifier.
const ENDPOINT_AUTHENTICATE: &str = "/General/AuthenticatePublisherAccount";

/// Session creation endpoint; returns the session identifier.
const ENDPOINT_LOGIN: &str = "/General/LoginPublisherAccountById";

/// Readings endpoint; returns the most recent glucose values.
const ENDPOINT_GLUCOSE_READINGS: &str = "/Publisher/ReadPublisherLatestGlucoseValues";

/// Fixed UUID identifying this class of client application to the backend.
const APPLICATION_ID: &str = "d89443d2-327c-4a6f-89e5-496bbb0317db";

/// HTTP request timeout in seconds.
/// 30s allows for slow backend responses while failing fast enough for
/// interactive callers.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Upper bound and default for the readings window, in minutes (one day).
pub const DEFAULT_MAX_MINUTES: u32 = 1440;

/// Upper bound and default for the number of readings per fetch
/// (one day of 5-minute samples).
pub const DEFAULT_MAX_COUNT: u32 = 288;

/// Window used by `fetch_current_reading`: wide enough for one 5-minute
/// sample plus transmitter jitter.
const CURRENT_READING_WINDOW_MINUTES: u32 = 10;

/// Client for the Share web service.
///
/// Clone is cheap - `reqwest::Client` uses Arc internally for connection
/// pooling. Each clone carries its own snapshot of the session field, so
/// a re-login on one clone is not visible to the others.
#[derive(Clone)]
pub struct ShareClient {
    client: Client,
    base_url: String,
    config: ShareConfig,
    session: Option<Session>,
}

impl ShareClient {
    /// Create an unauthenticated client for the configured region.
    ///
    /// Fails with [`ShareError::Argument`] on empty credentials; no
    /// network traffic is issued until [`authenticate`](Self::authenticate).
    pub fn new(config: ShareConfig) -> Result<Self, ShareError> {
        let base_url = config.server.base_url().to_string();
        Self::with_base_url(config, base_url)
    }

    /// Create an unauthenticated client against an explicit endpoint base
    /// instead of the regional one. Intended for tests and proxies.
    pub fn with_base_url(
        config: ShareConfig,
        base_url: impl Into<String>,
    ) -> Result<Self, ShareError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            config,
            session: None,
        })
    }

    /// Create a client and authenticate it in one step, so a successfully
    /// returned client always holds a usable session.
    pub async fn connect(config: ShareConfig) -> Result<Self, ShareError> {
        let mut client = Self::new(config)?;
        client.authenticate().await?;
        Ok(client)
    }

    /// Run the two-step login exchange and store the resulting session.
    ///
    /// Fails with [`ShareError::Authentication`] if either call fails or
    /// the backend answers with the default session id; in that case no
    /// session is stored. A failed attempt is terminal - recovery is
    /// calling this again.
    pub async fn authenticate(&mut self) -> Result<(), ShareError> {
        debug!(username = %self.config.username, "verifying Share account");

        let account_id: String = self
            .post_json(
                ENDPOINT_AUTHENTICATE,
                &AuthenticateRequest {
                    account_name: &self.config.username,
                    password: &self.config.password,
                    application_id: APPLICATION_ID,
                },
            )
            .await
            .map_err(|e| {
                warn!(error = %e, "account verification failed");
                ShareError::Authentication
            })?;

        let session_id: String = self
            .post_json(
                ENDPOINT_LOGIN,
                &LoginRequest {
                    account_id: &account_id,
                    password: &self.config.password,
                    application_id: APPLICATION_ID,
                },
            )
            .await
            .map_err(|e| {
                warn!(error = %e, "session creation failed");
                ShareError::Authentication
            })?;

        if Session::is_sentinel(&session_id) {
            warn!("backend returned the default session id; credentials not accepted");
            return Err(ShareError::Authentication);
        }
        if !session::is_well_formed_guid(&session_id) {
            warn!(session_id = %session_id, "backend returned a malformed session id");
            return Err(ShareError::Authentication);
        }

        debug!("session established");
        self.session = Some(Session::new(session_id, account_id));
        Ok(())
    }

    /// The active session, if authentication has succeeded.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.as_ref().map(Session::is_valid).unwrap_or(false)
    }

    /// Fetch up to `max_count` readings from the last `minutes` minutes,
    /// most recent first.
    ///
    /// `minutes` must be in 1..=1440 and `max_count` in 1..=288. A stale
    /// session rejected by the backend surfaces as [`ShareError::Fetch`]
    /// like any other remote failure.
    pub async fn fetch_glucose_readings(
        &self,
        minutes: u32,
        max_count: u32,
    ) -> Result<Vec<GlucoseReading>, ShareError> {
        let session = self
            .session
            .as_ref()
            .filter(|s| s.is_valid())
            .ok_or(ShareError::NotAuthenticated)?;

        if !(1..=DEFAULT_MAX_MINUTES).contains(&minutes) {
            return Err(ShareError::Argument(
                "minutes must be between 1 and 1440".into(),
            ));
        }
        if !(1..=DEFAULT_MAX_COUNT).contains(&max_count) {
            return Err(ShareError::Argument(
                "max count must be between 1 and 288".into(),
            ));
        }

        let raw: Vec<RawGlucoseReading> = self
            .post_json(
                ENDPOINT_GLUCOSE_READINGS,
                &ReadingsRequest {
                    session_id: &session.session_id,
                    minutes,
                    max_count,
                },
            )
            .await
            .map_err(|e| {
                warn!(error = %e, "glucose readings request failed");
                ShareError::Fetch(e.to_string())
            })?;

        debug!(count = raw.len(), "glucose readings received");
        raw.iter().map(GlucoseReading::from_raw).collect()
    }

    /// The most recent reading from the last day, if any exists.
    pub async fn fetch_latest_reading(&self) -> Result<Option<GlucoseReading>, ShareError> {
        let readings = self.fetch_glucose_readings(DEFAULT_MAX_MINUTES, 1).await?;
        Ok(readings.into_iter().next())
    }

    /// The reading from the last ten minutes, if the transmitter has
    /// reported one - "right now" rather than "any time today".
    pub async fn fetch_current_reading(&self) -> Result<Option<GlucoseReading>, ShareError> {
        let readings = self
            .fetch_glucose_readings(CURRENT_READING_WINDOW_MINUTES, 1)
            .await?;
        Ok(readings.into_iter().next())
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, RequestFailure> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(RequestFailure::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestFailure::remote(status, &body));
        }

        response.json().await.map_err(RequestFailure::Transport)
    }
}

// Internal request/response types for the wire contract

#[derive(Serialize)]
struct AuthenticateRequest<'a> {
    #[serde(rename = "accountName")]
    account_name: &'a str,
    password: &'a str,
    #[serde(rename = "applicationId")]
    application_id: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    #[serde(rename = "accountId")]
    account_id: &'a str,
    password: &'a str,
    #[serde(rename = "applicationId")]
    application_id: &'a str,
}

#[derive(Serialize)]
struct ReadingsRequest<'a> {
    #[serde(rename = "sessionId")]
    session_id: &'a str,
    minutes: u32,
    #[serde(rename = "maxCount")]
    max_count: u32,
}

/// Error payload the backend attaches to non-success responses.
#[derive(Debug, Deserialize)]
struct RemoteError {
    #[serde(rename = "Code")]
    code: Option<String>,
    #[serde(rename = "Message")]
    message: Option<String>,
}

/// Failure detail from one HTTP exchange, folded into the public error
/// category at each call site and logged there.
#[derive(Debug)]
enum RequestFailure {
    Transport(reqwest::Error),
    Remote { status: StatusCode, detail: String },
}

impl RequestFailure {
    fn remote(status: StatusCode, body: &str) -> Self {
        let detail = match serde_json::from_str::<RemoteError>(body) {
            Ok(RemoteError {
                code: Some(code),
                message,
            }) => match message {
                Some(message) => format!("{code}: {message}"),
                None => code,
            },
            _ => truncate_body(body),
        };
        RequestFailure::Remote { status, detail }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFailure::Transport(e) => write!(f, "{e}"),
            RequestFailure::Remote { status, detail } => {
                write!(f, "status {status}: {detail}")
            }
        }
    }
}
