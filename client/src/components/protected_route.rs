//! Role-gated wrapper for dashboard routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps each dashboard in `app.rs`. Every session update runs through a
//! per-mount `GuardMount`; the wrapper renders the matching view and performs
//! the redirect the guard asks for. Redirects replace the history entry.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use barberbook::{GuardDecision, GuardMount, Role, WaitReason};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingIndicator;
use crate::state::auth::{profile_error_text, use_auth};
use crate::util::auth::redirect_options;

/// Label shown while the guard waits.
pub fn wait_label(reason: WaitReason) -> &'static str {
    match reason {
        WaitReason::SessionLoading => "Loading...",
        WaitReason::ProfilePending => "Loading profile...",
        WaitReason::ProfileUnavailable => "Profile unavailable.",
    }
}

/// What the wrapper shows for a guard decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Children,
    Loading(&'static str),
    ProfileError,
    /// A redirect is pending; render nothing.
    Nothing,
}

pub fn guard_view(decision: GuardDecision) -> GuardView {
    match decision {
        GuardDecision::Render => GuardView::Children,
        GuardDecision::Wait(WaitReason::ProfileUnavailable) => GuardView::ProfileError,
        GuardDecision::Wait(reason) => GuardView::Loading(wait_label(reason)),
        GuardDecision::Redirect(_) => GuardView::Nothing,
    }
}

#[component]
pub fn ProtectedRoute(#[prop(optional)] required: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let decision = RwSignal::new(GuardDecision::Wait(WaitReason::SessionLoading));

    let mut mount = GuardMount::new(required);
    Effect::new(move || {
        let state = auth.state.get();
        let step = mount.observe(&state);
        if let Some(route) = step.navigate {
            navigate(route, redirect_options());
        }
        if decision.get_untracked() != step.decision {
            decision.set(step.decision);
        }
    });

    let on_retry = move |_| {
        if !auth.refresh_profile() {
            log::debug!("profile refresh not started");
        }
    };

    move || match guard_view(decision.get()) {
        GuardView::Children => children().into_any(),
        GuardView::ProfileError => {
            let detail = move || profile_error_text(&auth.state.get()).unwrap_or_default();
            view! {
                <div class="guard-error" role="alert">
                    <p class="guard-error__title">{wait_label(WaitReason::ProfileUnavailable)}</p>
                    <p class="guard-error__detail">{detail}</p>
                    <button class="button" on:click=on_retry>
                        "Try again"
                    </button>
                </div>
            }
            .into_any()
        }
        GuardView::Loading(label) => view! { <LoadingIndicator label=label/> }.into_any(),
        GuardView::Nothing => ().into_any(),
    }
}
