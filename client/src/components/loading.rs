//! Full-width loading indicator.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <span class="loading__spinner"></span>
            <span class="loading__label">{label}</span>
        </div>
    }
}
