//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public pages (welcome, sign-in, register) apply identical "already signed
//! in" redirect behavior; protected pages go through `ProtectedRoute`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use barberbook::SessionState;
use barberbook::guard::public_page_redirect;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthContext;

/// Where a public page at `current_path` should send the visitor, if anywhere.
pub fn public_bounce_target(state: &SessionState, current_path: &str) -> Option<&'static str> {
    public_page_redirect(state).filter(|route| *route != current_path)
}

/// Navigation options for guard-initiated redirects; they replace the history
/// entry so "back" does not return to a page that bounces again.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Send a visitor with a resolved role to their dashboard.
pub fn install_public_bounce<F>(auth: AuthContext, current_path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.state.get();
        if let Some(route) = public_bounce_target(&state, current_path) {
            log::info!("signed in as {:?}; leaving {current_path} for {route}", state.role());
            navigate(route, redirect_options());
        }
    });
}
