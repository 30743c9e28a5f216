//! Dashboard header with the user greeting and the sign-out button.

use leptos::prelude::*;

use crate::state::auth::{greeting, use_auth};

#[component]
pub fn AppHeader(#[prop(into)] title: String) -> impl IntoView {
    let auth = use_auth();
    let busy = RwSignal::new(false);

    let on_sign_out = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        log::info!("sign-out requested from header");

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            auth.sign_out().await;
        });
    };

    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <span class="app-header__logo">"BarberBook"</span>
                <span class="app-header__title">{title}</span>
            </div>
            <div class="app-header__user">
                <span class="app-header__greeting">{move || greeting(&auth.state.get())}</span>
                <button class="button button--ghost" on:click=on_sign_out disabled=move || busy.get()>
                    {move || if busy.get() { "Signing out..." } else { "Sign out" }}
                </button>
            </div>
        </header>
    }
}
