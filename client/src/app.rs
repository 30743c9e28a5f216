//! Root application component with routing and context providers.

use barberbook::Role;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    barber_dashboard::BarberDashboardPage, barbershop_dashboard::BarbershopDashboardPage,
    client_dashboard::ClientDashboardPage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
    welcome::WelcomePage,
};
use crate::state::auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Starts the session synchronizer (browser only), provides the auth context
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    auth::provide_auth_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/barberbook.css"/>
        <Title text="BarberBook"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=WelcomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("client-dashboard")
                    view=|| view! {
                        <ProtectedRoute required=Role::Client>
                            <ClientDashboardPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment("barbershop-dashboard")
                    view=|| view! {
                        <ProtectedRoute required=Role::Barbershop>
                            <BarbershopDashboardPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment("barber-dashboard")
                    view=|| view! {
                        <ProtectedRoute required=Role::Barber>
                            <BarberDashboardPage/>
                        </ProtectedRoute>
                    }
                />
            </Routes>
        </Router>
    }
}
