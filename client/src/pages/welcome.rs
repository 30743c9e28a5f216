//! Landing page with sign-in and registration entry points.

use barberbook::{Role, routes};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::util::auth::install_public_bounce;

#[component]
pub fn WelcomePage() -> impl IntoView {
    let auth = use_auth();
    install_public_bounce(auth, routes::WELCOME, use_navigate());

    view! {
        <div class="welcome-page">
            <div class="welcome-card">
                <h1>"BarberBook"</h1>
                <p class="welcome-card__subtitle">"Book your next cut in a few taps."</p>
                <div class="welcome-card__actions">
                    <a class="button" href=routes::sign_in_as(Role::Client)>
                        "Sign in as a client"
                    </a>
                    <a class="button button--outline" href=routes::sign_in_as(Role::Barbershop)>
                        "Sign in as a barbershop"
                    </a>
                    <a class="button button--ghost" href=routes::REGISTER>
                        "Create an account"
                    </a>
                </div>
            </div>
        </div>
    }
}
