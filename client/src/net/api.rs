//! HTTP implementation of the identity backend contract.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against a
//! GoTrue-style auth service (`/auth/v1`) and a PostgREST-style profile table
//! (`/rest/v1/profiles`). The session is persisted as JSON in `localStorage`
//! under [`BackendConfig::auth_storage_key`], and session changes are pushed to
//! subscribers as [`AuthEvent`]s.
//! Server-side (SSR): the adapter is not compiled; only the pure request and
//! response helpers exist so they stay unit-testable.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to `AuthError::Network` / `ProfileError::Transport`.
//! 4xx auth responses carry the service's own message as
//! `AuthError::Rejected` so the sign-in form can show it verbatim.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use barberbook::types::ProfileRecord;
#[cfg(any(test, feature = "hydrate"))]
use barberbook::{AuthError, AuthEvent, AuthEventKind, IdentityId, ProfileError, RoleProfile, Session, SignOutScope};

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

/// Refresh this many seconds before the recorded expiry.
#[cfg(any(test, feature = "hydrate"))]
const EXPIRY_MARGIN_SECS: i64 = 30;

#[cfg(any(test, feature = "hydrate"))]
const PASSWORD_GRANT_PATH: &str = "token?grant_type=password";

#[cfg(any(test, feature = "hydrate"))]
const REFRESH_GRANT_PATH: &str = "token?grant_type=refresh_token";

#[cfg(any(test, feature = "hydrate"))]
fn logout_path(scope: SignOutScope) -> String {
    format!("logout?scope={}", scope.as_str())
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_path(id: &IdentityId) -> String {
    format!("profiles?id=eq.{id}&select=*")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| format!("request failed: {status}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_error(status: u16, body: &str) -> AuthError {
    let message = rejection_message(status, body);
    if status >= 500 { AuthError::Network(message) } else { AuthError::Rejected(message) }
}

/// Whether `session` should be refreshed before use at `now` (epoch seconds).
#[cfg(any(test, feature = "hydrate"))]
fn needs_refresh(session: &Session, now: i64) -> bool {
    session.is_expired_at(now.saturating_add(EXPIRY_MARGIN_SECS))
}

/// How an authenticated request obtains its bearer token.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
enum BearerPlan {
    /// No session; send the anon key.
    Anonymous,
    Use(String),
    /// The session is about to expire; refresh it first.
    Refresh(Session),
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_plan(session: Option<Session>, now: i64) -> BearerPlan {
    match session {
        None => BearerPlan::Anonymous,
        Some(session) if needs_refresh(&session, now) => BearerPlan::Refresh(session),
        Some(session) => BearerPlan::Use(session.access_token),
    }
}

/// Event announcing a refresh outcome: the new session, or sign-out when the
/// refresh token was rejected.
#[cfg(any(test, feature = "hydrate"))]
fn refresh_event(refreshed: Option<Session>) -> AuthEvent {
    match refreshed {
        Some(session) => AuthEvent::new(AuthEventKind::TokenRefreshed, Some(session)),
        None => AuthEvent::new(AuthEventKind::SignedOut, None),
    }
}

/// Sign-up answers with a session when the account needs no confirmation and
/// with a bare user object otherwise.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_sign_up(body: &str) -> Option<Session> {
    serde_json::from_str::<Session>(body).ok().filter(|s| !s.access_token.is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_profile_rows(id: &IdentityId, body: &str) -> Result<RoleProfile, ProfileError> {
    let rows: Vec<ProfileRecord> =
        serde_json::from_str(body).map_err(|e| ProfileError::Malformed(e.to_string()))?;
    rows.into_iter()
        .find(|row| &row.id == id)
        .map(RoleProfile::from)
        .ok_or_else(|| ProfileError::NotFound(id.clone()))
}

#[cfg(feature = "hydrate")]
pub use http::HttpIdentityBackend;

#[cfg(feature = "hydrate")]
mod http {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use barberbook::backend::{AuthListener, IdentityBackend, ListenerId};
    use barberbook::NewProfile;
    use gloo_net::http::{Request, RequestBuilder};
    use serde::Serialize;

    use super::*;
    use crate::config::BackendConfig;
    use crate::net::types::{PasswordGrant, RefreshGrant, SignUpPayload};
    use crate::util::storage::LocalTokenStorage;

    pub struct HttpIdentityBackend {
        config: BackendConfig,
        storage: LocalTokenStorage,
        /// Session currently in use. Outlives the persisted copy so sign-out
        /// can still revoke it after the token cache has been cleared.
        active: RefCell<Option<Session>>,
        listeners: RefCell<Vec<(ListenerId, AuthListener)>>,
        next_listener: Cell<u64>,
    }

    impl HttpIdentityBackend {
        pub fn new(config: BackendConfig, storage: LocalTokenStorage) -> Self {
            Self {
                config,
                storage,
                active: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }
        }

        fn persisted_session(&self) -> Option<Session> {
            let raw = self.storage.get_item(&self.config.auth_storage_key())?;
            match serde_json::from_str(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    log::warn!("discarding unreadable persisted session: {e}");
                    self.forget_session();
                    None
                }
            }
        }

        fn persist_session(&self, session: &Session) {
            match serde_json::to_string(session) {
                Ok(raw) => self.storage.set_item(&self.config.auth_storage_key(), &raw),
                Err(e) => log::error!("failed to serialize session: {e}"),
            }
            *self.active.borrow_mut() = Some(session.clone());
        }

        fn session_in_use(&self) -> Option<Session> {
            let active = self.active.borrow().clone();
            active.or_else(|| self.persisted_session())
        }

        fn access_token(&self) -> Option<String> {
            self.session_in_use().map(|s| s.access_token)
        }

        /// Bearer token for an authenticated request, refreshing an expiring
        /// session first. A refresh that fails in transport keeps the old token.
        async fn fresh_access_token(&self) -> Option<String> {
            match bearer_plan(self.session_in_use(), crate::util::clock::now_secs()) {
                BearerPlan::Anonymous => None,
                BearerPlan::Use(token) => Some(token),
                BearerPlan::Refresh(stale) => match self.refresh(&stale).await {
                    Ok(refreshed) => refreshed.map(|s| s.access_token),
                    Err(e) => {
                        log::warn!("token refresh failed: {e}");
                        Some(stale.access_token)
                    }
                },
            }
        }

        fn forget_session(&self) {
            use barberbook::TokenStorage;
            self.storage.remove(&self.config.auth_storage_key());
            self.active.replace(None);
        }

        fn emit(&self, kind: AuthEventKind, session: Option<Session>) {
            self.broadcast(&AuthEvent::new(kind, session));
        }

        fn broadcast(&self, event: &AuthEvent) {
            let listeners: Vec<AuthListener> = self.listeners.borrow().iter().map(|(_, l)| l.clone()).collect();
            for listener in listeners {
                listener(event.clone());
            }
        }

        fn with_headers(&self, request: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
            let token = bearer.unwrap_or(&self.config.anon_key);
            request.header("apikey", &self.config.anon_key).header("Authorization", &format!("Bearer {token}"))
        }

        async fn post_json<T: Serialize>(
            &self,
            url: &str,
            body: &T,
            bearer: Option<&str>,
        ) -> Result<(u16, String), String> {
            let response = self
                .with_headers(Request::post(url), bearer)
                .json(body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            let status = response.status();
            let text = response.text().await.map_err(|e| e.to_string())?;
            Ok((status, text))
        }

        /// Exchange the refresh token and announce the outcome to subscribers.
        async fn refresh(&self, stale: &Session) -> Result<Option<Session>, AuthError> {
            log::debug!("session expiring; refreshing");
            let grant = RefreshGrant { refresh_token: &stale.refresh_token };
            let (status, body) = self
                .post_json(&self.config.auth_url(REFRESH_GRANT_PATH), &grant, None)
                .await
                .map_err(AuthError::Network)?;
            if !is_success(status) {
                log::info!("session refresh rejected ({status}); treating as signed out");
                self.forget_session();
                self.broadcast(&refresh_event(None));
                return Ok(None);
            }
            let session: Session =
                serde_json::from_str(&body).map_err(|e| AuthError::Network(format!("malformed session: {e}")))?;
            self.persist_session(&session);
            self.broadcast(&refresh_event(Some(session.clone())));
            Ok(Some(session))
        }
    }

    #[async_trait(?Send)]
    impl IdentityBackend for HttpIdentityBackend {
        fn subscribe(&self, listener: AuthListener) -> ListenerId {
            let id = ListenerId(self.next_listener.get());
            self.next_listener.set(id.0 + 1);
            self.listeners.borrow_mut().push((id, listener));
            id
        }

        fn unsubscribe(&self, id: ListenerId) {
            self.listeners.borrow_mut().retain(|(l, _)| *l != id);
        }

        async fn current_session(&self) -> Result<Option<Session>, AuthError> {
            let Some(session) = self.persisted_session() else {
                return Ok(None);
            };
            if needs_refresh(&session, crate::util::clock::now_secs()) {
                return self.refresh(&session).await;
            }
            *self.active.borrow_mut() = Some(session.clone());
            Ok(Some(session))
        }

        async fn sign_up(&self, email: &str, password: &str, profile: &NewProfile) -> Result<(), AuthError> {
            let payload = SignUpPayload { email, password, data: profile };
            let (status, body) =
                self.post_json(&self.config.auth_url("signup"), &payload, None).await.map_err(AuthError::Network)?;
            if !is_success(status) {
                return Err(auth_error(status, &body));
            }
            if let Some(session) = session_from_sign_up(&body) {
                self.persist_session(&session);
                self.emit(AuthEventKind::SignedIn, Some(session));
            }
            Ok(())
        }

        async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
            let grant = PasswordGrant { email, password };
            let (status, body) = self
                .post_json(&self.config.auth_url(PASSWORD_GRANT_PATH), &grant, None)
                .await
                .map_err(AuthError::Network)?;
            if !is_success(status) {
                return Err(auth_error(status, &body));
            }
            let session: Session =
                serde_json::from_str(&body).map_err(|e| AuthError::Network(format!("malformed session: {e}")))?;
            self.persist_session(&session);
            self.emit(AuthEventKind::SignedIn, Some(session));
            Ok(())
        }

        async fn sign_out(&self, scope: SignOutScope) -> Result<(), AuthError> {
            let token = self.access_token();
            self.forget_session();
            let result = match token {
                Some(token) => {
                    let url = self.config.auth_url(&logout_path(scope));
                    match self.with_headers(Request::post(&url), Some(&token)).send().await {
                        Ok(resp) if is_success(resp.status()) || matches!(resp.status(), 401 | 404) => Ok(()),
                        Ok(resp) => {
                            let status = resp.status();
                            let body = resp.text().await.unwrap_or_default();
                            Err(auth_error(status, &body))
                        }
                        Err(e) => Err(AuthError::Network(e.to_string())),
                    }
                }
                None => Ok(()),
            };
            self.emit(AuthEventKind::SignedOut, None);
            result
        }

        async fn fetch_profile(&self, id: &IdentityId) -> Result<RoleProfile, ProfileError> {
            let token = self.fresh_access_token().await;
            let url = self.config.rest_url(&profile_path(id));
            let response = self
                .with_headers(Request::get(&url), token.as_deref())
                .send()
                .await
                .map_err(|e| ProfileError::Transport(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| ProfileError::Transport(e.to_string()))?;
            if !is_success(status) {
                return Err(ProfileError::Transport(rejection_message(status, &body)));
            }
            parse_profile_rows(id, &body)
        }
    }
}
