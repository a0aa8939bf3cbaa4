//! Single choke point for every request to the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth calls and content fetches alike go through [`ApiGateway::send`]:
//! the stored token is attached as a bearer credential when present, and a
//! 401 answering any credentialed request clears the session. That clear is the only side
//! effect outside the returned value and the only automatic logout.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is a `Result<T, ApiError>`; transport failures, non-2xx
//! statuses, and undecodable bodies all become values. The gateway never
//! retries and never navigates. Redirects are the route guard's job once
//! it observes the cleared session.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, GENERIC_FAILURE};
use super::transport::{HttpRequest, Method, Transport};
use crate::config::ClientConfig;
use crate::state::session::SessionCell;

pub type ApiResult<T> = Result<T, ApiError>;

/// Whose credential to attach to a request.
///
/// Only requests that carried a token can clear the session on 401.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Bearer {
    /// Whatever the token store holds at send time.
    Stored,
    /// A credential captured earlier, e.g. the one being logged out, or
    /// `None` for login calls.
    Explicit(Option<String>),
}

#[derive(Clone)]
pub struct ApiGateway {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    session: SessionCell,
}

impl ApiGateway {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>, session: SessionCell) -> Self {
        Self { config, transport, session }
    }

    #[must_use]
    pub fn session(&self) -> &SessionCell {
        &self.session
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// See [`ApiGateway::send`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(Method::Get, path, None).await
    }

    /// `POST` a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiGateway::send`]; also [`ApiError::Decode`] if `body` cannot
    /// be serialized.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        self.post_as(Bearer::Stored, path, body).await
    }

    pub(crate) async fn post_as<B: Serialize, T: DeserializeOwned>(
        &self,
        bearer: Bearer,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send_as(bearer, Method::Post, path, Some(body)).await
    }

    /// Issue a request with the stored bearer token.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] when no response arrived, [`ApiError::Unauthorized`]
    /// on 401 (after clearing the session), [`ApiError::Server`] on any other
    /// non-2xx status, [`ApiError::Decode`] when a 2xx body does not match `T`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<T> {
        self.send_as(Bearer::Stored, method, path, body).await
    }

    pub(crate) async fn send_as<T: DeserializeOwned>(
        &self,
        bearer: Bearer,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<T> {
        // Captured before the await so a 401 can only clear the session that
        // issued the request.
        let generation = self.session.generation();
        let bearer = match bearer {
            Bearer::Stored => self.session.store().token(),
            Bearer::Explicit(token) => token,
        };
        let carried_token = bearer.is_some();
        let request = HttpRequest { method, url: self.config.endpoint(path), bearer, body };

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                let message = if e.0.is_empty() { GENERIC_FAILURE.to_owned() } else { e.0 };
                log::error!("API error: {path}: {message}");
                return Err(ApiError::Network(message));
            }
        };

        if !response.is_success() {
            let err = ApiError::from_status(response.status, &response.body);
            // A 401 on an uncredentialed request (a login) says nothing
            // about the current session.
            if response.status == 401 && carried_token {
                if self.session.invalidate(generation) {
                    log::warn!("API {path} returned 401; session cleared");
                } else {
                    log::debug!("API {path} returned 401 for a superseded session; ignored");
                }
            } else {
                log::error!("API error: {path}: {err}");
            }
            return Err(err);
        }

        decode_body(&response.body)
    }
}

/// Decode a 2xx body. An empty body decodes as JSON `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let raw = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

impl std::fmt::Debug for ApiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiGateway")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
