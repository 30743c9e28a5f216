//! Sign-in page with client and barbershop tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful sign-in does not navigate by itself. The synchronizer picks up
//! the new session, fetches the profile, and the public-page bounce sends the
//! visitor to the dashboard for the role they actually have, whichever tab
//! they used.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use barberbook::{Role, routes};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::message_line::{MessageLine, Notice};
use crate::state::auth::{profile_error_text, use_auth};
use crate::util::auth::install_public_bounce;

/// Role tab selected by the `type` query parameter; defaults to client.
pub fn login_tab(tag: Option<&str>) -> Role {
    tag.and_then(|t| t.parse().ok()).unwrap_or(Role::Client)
}

pub fn tab_label(role: Role) -> &'static str {
    match role {
        Role::Client => "Client",
        Role::Barbershop => "Barbershop",
        Role::Barber => "Barber",
    }
}

/// Trimmed email and raw password, or the message to show.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please fill in email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub fn submit_label(role: Role, busy: bool) -> String {
    if busy { "Signing in...".to_owned() } else { format!("Sign in as {}", tab_label(role).to_lowercase()) }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    install_public_bounce(auth, routes::SIGN_IN, use_navigate());

    let query = use_query_map();
    let tab = Memo::new(move |_| query.with(|q| login_tab(q.get("type").as_deref())));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                notice.set(Some(Notice::error(message)));
                return;
            }
        };
        busy.set(true);
        notice.set(None);
        log::info!("sign-in submitted from the {} tab", tab.get_untracked());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.sign_in(email_value, password_value).await {
                Ok(()) => {
                    password.set(String::new());
                    notice.set(Some(Notice::info("Signed in. Loading your dashboard...")));
                }
                Err(e) => notice.set(Some(Notice::error(format!("Sign-in failed: {e}")))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    let profile_problem = move || profile_error_text(&auth.state.get());
    let on_retry = move |_| {
        auth.refresh_profile();
    };

    view! {
        <div class="login-page">
            <a class="button button--ghost" href=routes::WELCOME>
                "Back"
            </a>
            <div class="login-card">
                <h1>"Sign in"</h1>
                <nav class="tabs">
                    {[Role::Client, Role::Barbershop]
                        .into_iter()
                        .map(|role| {
                            view! {
                                <a
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab.get() == role
                                    href=routes::sign_in_as(role)
                                >
                                    {tab_label(role)}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <form class="login-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder=move || {
                            if tab.get() == Role::Barbershop { "shop@example.com" } else { "you@example.com" }
                        }
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                    <button class="button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(tab.get(), busy.get())}
                    </button>
                </form>
                <MessageLine notice=notice/>
                <Show when=move || profile_problem().is_some()>
                    <div class="guard-error" role="alert">
                        <p>{move || profile_problem().unwrap_or_default()}</p>
                        <button class="button button--outline" on:click=on_retry>
                            "Try again"
                        </button>
                    </div>
                </Show>
                <a class="button button--link" href=routes::REGISTER>
                    "No account yet? Register"
                </a>
            </div>
        </div>
    }
}
