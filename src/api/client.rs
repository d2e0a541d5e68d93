use std::time::Duration;

use actix_web::http::{header, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::session::AdminSession;
use super::error::{ApiError, FALLBACK_MESSAGE};

/// Largest response body the portal will buffer (result listings can be big).
const BODY_LIMIT: usize = 8 * 1024 * 1024;

/// Body of a failed response; only `message` is read.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Acknowledgement returned by mutating endpoints. Extra fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Thin JSON client bound to one API origin.
///
/// Built once per worker: `awc::Client` is not `Send`.
#[derive(Clone)]
pub struct ApiClient {
    http: awc::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: &str, timeout: Duration) -> Self {
        // awc's rustls connector needs a process-wide provider; a second
        // install (other workers, tests) returns Err and is ignored.
        let _ = rustls::crypto::ring::default_provider().install_default();
        let http = awc::Client::builder()
            .timeout(timeout)
            .finish();
        Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// `GET endpoint`, decoded into `T`.
    pub async fn get<T>(&self, endpoint: &str, session: Option<&AdminSession>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.call::<T, ()>(endpoint, Method::GET, None, session).await
    }

    /// `DELETE endpoint` with the admin's bearer token.
    pub async fn delete(&self, endpoint: &str, session: &AdminSession) -> Result<Ack, ApiError> {
        self.execute::<()>(endpoint, Method::DELETE, None, Some(session)).await
    }

    /// Issue `method endpoint` with an optional JSON body and decode the JSON reply.
    ///
    /// The bearer token is attached only when `session` is given.
    pub async fn call<T, B>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&B>,
        session: Option<&AdminSession>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let bytes = self.send(endpoint, method, body, session).await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            log::error!("Undecodable response from {endpoint}: {e}");
            ApiError::Decode(e.to_string())
        })
    }

    /// Like [`call`](Self::call) for endpoints whose reply body carries nothing the
    /// portal needs. An empty body counts as success; `"success": false` does not.
    pub async fn execute<B>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&B>,
        session: Option<&AdminSession>,
    ) -> Result<Ack, ApiError>
    where
        B: Serialize,
    {
        let bytes = self.send(endpoint, method, body, session).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Ack::default());
        }
        let ack: Ack = serde_json::from_slice(&bytes).unwrap_or_default();
        if ack.success == Some(false) {
            let message = ack
                .message
                .clone()
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
            return Err(ApiError::Rejected(message));
        }
        Ok(ack)
    }

    async fn send<B>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&B>,
        session: Option<&AdminSession>,
    ) -> Result<actix_web::web::Bytes, ApiError>
    where
        B: Serialize,
    {
        let url = format!("{}{}", self.base, endpoint);
        log::debug!("{method} {url}");

        let mut req = self
            .http
            .request(method.clone(), url.as_str())
            .insert_header((header::CONTENT_TYPE, "application/json"));
        if let Some(s) = session {
            req = req.bearer_auth(&s.token);
        }

        let sent = match body {
            Some(b) => req.send_json(b).await,
            None => req.send().await,
        };
        let mut res = sent.map_err(|e| {
            log::error!("{method} {endpoint} failed: {e}");
            ApiError::Transport(e.to_string())
        })?;

        let status = res.status();
        let bytes = res
            .body()
            .limit(BODY_LIMIT)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
            log::warn!("{method} {endpoint} returned {status}: {message}");
            return Err(ApiError::Status { status: status.as_u16(), message });
        }

        Ok(bytes)
    }
}
