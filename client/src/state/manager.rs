//! The session manager: the only sanctioned way to change who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once in `App` and provided through Leptos context. Pages
//! call `authenticate_*` then `login`; dashboards call `logout` and
//! `refresh`; the route guard reads the published [`AuthState`].
//!
//! STATE MACHINE
//! =============
//! `LoggedOut --login(admin)--> LoggedIn(Admin)`
//! `LoggedOut --login(member)--> LoggedIn(Member)`
//! `LoggedIn(*) --logout | 401 on any call--> LoggedOut`
//! `LoggedIn(*) --refresh failure--> LoggedIn(*)` (unchanged)
//!
//! [`AuthState`]: super::auth::AuthState

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::sync::Arc;

use super::session::{Listener, Session, SessionCell};
use super::store::TokenStore;
use crate::config::ClientConfig;
use crate::net::api::{ADMIN_LOGIN, ContentApi, CURRENT_USER, LOGOUT, MEMBER_LOGIN, VALIDATE_TOKEN};
use crate::net::error::ApiError;
use crate::net::gateway::{ApiGateway, ApiResult, Bearer};
use crate::net::transport::{FetchTransport, Method, Transport};
use crate::net::types::{AdminCredentials, AuthPayload, MemberCredentials, TokenValidity, User};

#[derive(Clone, Debug)]
pub struct SessionManager {
    gateway: ApiGateway,
}

impl SessionManager {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>, store: TokenStore) -> Self {
        let session = SessionCell::new(store);
        Self { gateway: ApiGateway::new(config, transport, session) }
    }

    /// `localStorage` + `fetch`, the production wiring.
    #[must_use]
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(config, Arc::new(FetchTransport), TokenStore::browser())
    }

    fn cell(&self) -> &SessionCell {
        self.gateway.session()
    }

    /// Content endpoints sharing this manager's credentials.
    #[must_use]
    pub fn content(&self) -> ContentApi {
        ContentApi::new(self.gateway.clone())
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.cell().snapshot()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session().is_admin()
    }

    #[must_use]
    pub fn is_member(&self) -> bool {
        self.session().is_member()
    }

    /// Load the persisted session. Reads storage on the first call only.
    pub fn hydrate(&self) -> Session {
        self.cell().hydrate()
    }

    /// Register a callback for every session change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + Send + Sync + 'static) {
        let listener: Listener = Arc::new(listener);
        self.cell().subscribe(listener);
    }

    /// Adopt credentials already obtained from `authenticate_*`. No network.
    ///
    /// A blank token is refused and the session is left unchanged.
    pub fn login(&self, user: User, token: String) {
        let (username, role) = (user.username.clone(), user.role);
        if self.cell().establish(user, token) {
            log::info!("signed in as {username} ({role:?})");
        } else {
            log::warn!("refused sign-in for {username}: empty token");
        }
    }

    /// Exchange admin credentials for a user and token. Sent without a
    /// bearer token, so a rejection leaves any current session untouched.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidCredentials`] when the back end refuses the
    /// credentials, otherwise whatever the gateway reported.
    pub async fn authenticate_admin(&self, email: &str, password: &str) -> ApiResult<AuthPayload> {
        self.gateway
            .post_as(Bearer::Explicit(None), ADMIN_LOGIN, &AdminCredentials { email, password })
            .await
            .map_err(ApiError::into_login_failure)
    }

    /// Exchange member credentials for a user and token.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidCredentials`] when the back end refuses the
    /// credentials, otherwise whatever the gateway reported.
    pub async fn authenticate_member(&self, username: &str, password: &str) -> ApiResult<AuthPayload> {
        self.gateway
            .post_as(Bearer::Explicit(None), MEMBER_LOGIN, &MemberCredentials { username, password })
            .await
            .map_err(ApiError::into_login_failure)
    }

    /// Sign out locally, then tell the back end.
    ///
    /// The local clear happens first and cannot fail. The notification
    /// carries the token being discarded; its outcome is dropped.
    pub async fn logout(&self) {
        let token = self.cell().snapshot().token().map(str::to_owned);
        self.cell().clear();
        let Some(token) = token else {
            return;
        };
        log::info!("signed out");
        let notified: ApiResult<()> =
            self.gateway.send_as(Bearer::Explicit(Some(token)), Method::Post, LOGOUT, None).await;
        if let Err(e) = notified {
            log::debug!("logout notification failed: {e}");
        }
    }

    /// Re-fetch the current user and replace the stored descriptor.
    ///
    /// # Errors
    ///
    /// Any gateway failure (the session is left as it was, except that a
    /// 401 clears it), or [`ApiError::Superseded`] if the session was
    /// cleared or replaced while the request was in flight.
    pub async fn refresh(&self) -> ApiResult<User> {
        let generation = self.cell().generation();
        let user: User = self.gateway.get(CURRENT_USER).await?;
        if self.cell().replace_user(user.clone(), generation) {
            Ok(user)
        } else {
            log::debug!("discarding stale {CURRENT_USER} response");
            Err(ApiError::Superseded)
        }
    }

    /// Ask the back end whether the stored token is still accepted.
    pub async fn validate(&self) -> bool {
        if self.cell().store().token().is_none() {
            return false;
        }
        self.gateway
            .get::<TokenValidity>(VALIDATE_TOKEN)
            .await
            .is_ok_and(|v| v.valid)
    }
}
