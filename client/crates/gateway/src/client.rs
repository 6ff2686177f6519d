//! API Gateway Client
//!
//! Wraps `reqwest` with the three behaviors every backend call shares:
//! bearer-token injection (read fresh from the store per request), uniform
//! error mapping, and the global 401 handler.

use std::sync::Arc;

use reqwest::{RequestBuilder, Response, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;

use kernel::error::app_error::{AppError, AppResult};
use kernel::error::kind::ErrorKind;
use platform::store::{SessionStore, keys};

use crate::config::GatewayConfig;
use crate::event::GatewayEvent;

/// Capacity of the event channel; events are rare and consumers few.
const EVENT_CHANNEL_CAPACITY: usize = 8;

/// The single outbound HTTP client
///
/// Cheap to clone via `Arc`; construct one per process and share it.
pub struct ApiGateway {
    http: reqwest::Client,
    config: GatewayConfig,
    store: Arc<dyn SessionStore>,
    events: broadcast::Sender<GatewayEvent>,
}

impl ApiGateway {
    /// Create a gateway over the given store
    ///
    /// Fails if the underlying HTTP client cannot be built, since a
    /// fallback client would silently drop the configured timeout.
    pub fn new(config: GatewayConfig, store: Arc<dyn SessionStore>) -> AppResult<Self> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(AppError::from)?;

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            http,
            config,
            store,
            events,
        })
    }

    /// Subscribe to gateway events
    ///
    /// The application subscribes once at startup and reacts to
    /// [`GatewayEvent::SessionExpired`] by dropping its in-memory session
    /// and navigating to the login entry point.
    pub fn subscribe(&self) -> broadcast::Receiver<GatewayEvent> {
        self.events.subscribe()
    }

    // ========================================================================
    // Typed calls
    // ========================================================================

    /// `GET path`, JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let resp = self.send(self.http.get(self.config.url(path))).await?;
        Ok(resp.json().await.map_err(AppError::from)?)
    }

    /// `GET path?query`, JSON response
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let resp = self
            .send(self.http.get(self.config.url(path)).query(query))
            .await?;
        Ok(resp.json().await.map_err(AppError::from)?)
    }

    /// `GET path` where the resource may legitimately not exist
    ///
    /// A 404, or a 200 with a JSON `null` body, becomes `Ok(None)`. Every
    /// other failure passes through unchanged, including the 401 handling.
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> AppResult<Option<T>> {
        match self.send(self.http.get(self.config.url(path))).await {
            Ok(resp) => Ok(resp.json::<Option<T>>().await.map_err(AppError::from)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// `GET path`, raw bytes (resume download)
    pub async fn get_bytes(&self, path: &str) -> AppResult<Vec<u8>> {
        let resp = self.send(self.http.get(self.config.url(path))).await?;
        Ok(resp.bytes().await.map_err(AppError::from)?.to_vec())
    }

    /// `POST path` with JSON body, JSON response
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let resp = self
            .send(self.http.post(self.config.url(path)).json(body))
            .await?;
        Ok(resp.json().await.map_err(AppError::from)?)
    }

    /// `POST path` with JSON body, response body ignored
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AppResult<()> {
        self.send(self.http.post(self.config.url(path)).json(body))
            .await?;
        Ok(())
    }

    /// `POST path` with a multipart form (file upload), JSON response
    ///
    /// The multipart boundary content type replaces the JSON default
    /// header for this request only.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> AppResult<T> {
        let resp = self
            .send(self.http.post(self.config.url(path)).multipart(form))
            .await?;
        Ok(resp.json().await.map_err(AppError::from)?)
    }

    /// `PUT path` with JSON body, JSON response
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let resp = self
            .send(self.http.put(self.config.url(path)).json(body))
            .await?;
        Ok(resp.json().await.map_err(AppError::from)?)
    }

    /// `PUT path` with JSON body, response body ignored
    pub async fn put_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AppResult<()> {
        self.send(self.http.put(self.config.url(path)).json(body))
            .await?;
        Ok(())
    }

    /// `PUT path` with no body, response ignored (mark-read style calls)
    pub async fn put_empty(&self, path: &str) -> AppResult<()> {
        self.send(self.http.put(self.config.url(path))).await?;
        Ok(())
    }

    /// `DELETE path`, response body ignored
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        self.send(self.http.delete(self.config.url(path))).await?;
        Ok(())
    }

    // ========================================================================
    // Core pipeline
    // ========================================================================

    /// Attach the bearer token, send, inspect the response.
    ///
    /// One attempt per call. The token is read from the store at request
    /// time rather than cached so a login or logout between calls takes
    /// effect immediately.
    async fn send(&self, req: RequestBuilder) -> AppResult<Response> {
        let req = match self.store.read(keys::TOKEN) {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req.send().await.map_err(AppError::from)?;
        self.inspect(resp).await
    }

    /// Map non-success responses to errors; 401 triggers the global
    /// forced-logout side effect regardless of which call it came from.
    async fn inspect(&self, resp: Response) -> AppResult<Response> {
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(
                path = %resp.url().path(),
                "Backend rejected credential, clearing persisted session"
            );
            self.store.clear_all();
            let _ = self.events.send(GatewayEvent::SessionExpired);
            return Err(AppError::unauthorized("Session expired")
                .with_action("Please sign in again"));
        }

        if !status.is_success() {
            let message = read_error_message(resp).await;
            return Err(AppError::from_status(status.as_u16(), message));
        }

        Ok(resp)
    }
}

/// Pull a human-readable message out of an error response.
///
/// The backend usually answers with `{"message": "..."}` but some endpoints
/// return a bare string; fall back to the reason phrase.
async fn read_error_message(resp: Response) -> String {
    let status = resp.status();
    let fallback = || {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    };

    let Ok(text) = resp.text().await else {
        return fallback();
    };

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
        if let Some(message) = value.as_str() {
            return message.to_string();
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        fallback()
    } else {
        trimmed.to_string()
    }
}
