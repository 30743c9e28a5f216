//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate redirects and
//! identity-dependent rendering. The session core owns the truth; this module
//! mirrors its store into a `RwSignal` and exposes the credential actions.
//!
//! DESIGN
//! ======
//! The synchronizer and actions hold `Rc` handles and are not `Send`, so they
//! live in a local `StoredValue` owned by the root component. Dropping the
//! root disposes the value, which stops the synchronizer. Under SSR nothing
//! is started and the state stays pending, which renders the loading view
//! until the browser takes over.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use barberbook::{AuthError, CredentialActions, SessionState, SessionSync, SignUpRequest};
use leptos::prelude::*;

/// Running session core for this page.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub struct AuthRuntime {
    sync: SessionSync,
    actions: CredentialActions,
}

/// Reactive auth handle provided via context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<SessionState>,
    runtime: StoredValue<Option<Rc<AuthRuntime>>, LocalStorage>,
}

/// Create the auth context, start the synchronizer in the browser, and
/// provide the context to descendants.
pub fn provide_auth_context() -> AuthContext {
    let state = RwSignal::new(SessionState::pending());

    #[cfg(feature = "hydrate")]
    let runtime = Some(Rc::new(start_runtime(state)));
    #[cfg(not(feature = "hydrate"))]
    let runtime: Option<Rc<AuthRuntime>> = None;

    let auth = AuthContext { state, runtime: StoredValue::new_local(runtime) };
    provide_context(auth);
    auth
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(feature = "hydrate")]
fn start_runtime(state: RwSignal<SessionState>) -> AuthRuntime {
    use barberbook::SessionStore;

    use crate::config::BackendConfig;
    use crate::net::api::HttpIdentityBackend;
    use crate::util::browser::{BrowserExecutor, BrowserNavigator};
    use crate::util::storage::LocalTokenStorage;

    let config = BackendConfig::from_build_env();
    log::info!("session backend at {}", config.url);
    let backend = Rc::new(HttpIdentityBackend::new(config.clone(), LocalTokenStorage));
    let store = SessionStore::new();
    store.watch(move |s| state.set(s.clone()));
    let sync = SessionSync::start(backend, store, Rc::new(BrowserExecutor), config.sync);
    let actions = CredentialActions::new(&sync, Rc::new(LocalTokenStorage), Rc::new(BrowserNavigator));
    state.set(sync.store().snapshot());
    AuthRuntime { sync, actions }
}

fn not_running() -> AuthError {
    AuthError::Network("session service is not running".to_owned())
}

impl AuthContext {
    fn runtime(self) -> Option<Rc<AuthRuntime>> {
        self.runtime.get_value()
    }

    /// # Errors
    ///
    /// Returns validation errors or the backend's rejection.
    pub async fn sign_up(self, request: SignUpRequest) -> Result<(), AuthError> {
        let runtime = self.runtime().ok_or_else(not_running)?;
        runtime.actions.sign_up(request).await
    }

    /// # Errors
    ///
    /// Returns the backend's rejection; the session is unchanged.
    pub async fn sign_in(self, email: String, password: String) -> Result<(), AuthError> {
        let runtime = self.runtime().ok_or_else(not_running)?;
        runtime.actions.sign_in(&email, &password).await
    }

    /// Sign out and reload the welcome page.
    pub async fn sign_out(self) {
        if let Some(runtime) = self.runtime() {
            runtime.actions.sign_out().await;
        }
    }

    /// Retry the profile fetch; `false` when signed out or already fetching.
    pub fn refresh_profile(self) -> bool {
        self.runtime().is_some_and(|runtime| runtime.sync.refresh_profile())
    }
}

/// Header greeting for the signed-in user.
pub fn greeting(state: &SessionState) -> String {
    match state.display_name() {
        Some(name) => format!("Hello, {name}!"),
        None => "Hello!".to_owned(),
    }
}

/// Message shown while the profile cannot be loaded.
pub fn profile_error_text(state: &SessionState) -> Option<String> {
    state
        .profile_error
        .as_ref()
        .filter(|_| state.profile.is_none())
        .map(|e| format!("We could not load your profile ({e})."))
}
