//! Catch-all page for unknown routes.

use barberbook::routes;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    log::warn!("no route matched; rendering not-found page");
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a class="button" href=routes::WELCOME>
                "Back to home"
            </a>
        </div>
    }
}
