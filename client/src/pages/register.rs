//! Account registration for clients and barbershops.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use barberbook::{NewProfile, Role, SignUpRequest, routes};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::components::message_line::{MessageLine, Notice};
use crate::state::auth::use_auth;
use crate::util::auth::install_public_bounce;

/// Raw field values from the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// Sign-up payload for `role`; only the field the role collects is sent.
    pub fn into_request(self, role: Role) -> SignUpRequest {
        let (phone, address) = match role {
            Role::Client => (Some(self.phone), None),
            Role::Barbershop => (None, Some(self.address)),
            Role::Barber => (None, None),
        };
        SignUpRequest {
            email: self.email,
            password: self.password,
            profile: NewProfile { role, name: self.name, phone, address },
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    install_public_bounce(auth, routes::REGISTER, navigate.clone());

    let tab = RwSignal::new(Role::Client);
    let form = RwSignal::new(RegisterForm::default());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let role = tab.get();
        let request = form.get().into_request(role);
        if let Err(e) = request.clone().validated() {
            notice.set(Some(Notice::error(e.to_string())));
            return;
        }
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.sign_up(request).await {
                    Ok(()) => {
                        log::info!("registered a {role} account");
                        navigate(&routes::sign_in_as(role), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => notice.set(Some(Notice::error(format!("Registration failed: {e}")))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="register-page">
            <a class="button button--ghost" href=routes::WELCOME>
                "Back"
            </a>
            <div class="login-card">
                <h1>"Create an account"</h1>
                <nav class="tabs">
                    {[Role::Client, Role::Barbershop]
                        .into_iter()
                        .map(|role| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab.get() == role
                                    on:click=move |_| {
                                        tab.set(role);
                                        notice.set(None);
                                    }
                                >
                                    {if role == Role::Client { "Client" } else { "Barbershop" }}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <form class="login-form" on:submit=on_submit>
                    {move || {
                        if tab.get() == Role::Barbershop {
                            view! {
                                {text_field(form, busy, "Barbershop name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                                {text_field(form, busy, "Address", "text", |f| f.address.clone(), |f, v| f.address = v)}
                            }
                                .into_any()
                        } else {
                            view! {
                                {text_field(form, busy, "Full name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                                {text_field(form, busy, "Phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                            }
                                .into_any()
                        }
                    }}
                    {text_field(form, busy, "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {text_field(form, busy, "Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    <button class="button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <MessageLine notice=notice/>
                <a class="button button--link" href=routes::SIGN_IN>
                    "Already registered? Sign in"
                </a>
            </div>
        </div>
    }
}

type FieldGet = fn(&RegisterForm) -> String;
type FieldSet = fn(&mut RegisterForm, String);

fn text_field(
    form: RwSignal<RegisterForm>,
    busy: RwSignal<bool>,
    label: &'static str,
    kind: &'static str,
    get: FieldGet,
    set: FieldSet,
) -> impl IntoView {
    view! {
        <label class="register-field">
            <span>{label}</span>
            <input
                class="login-input"
                type=kind
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
                disabled=move || busy.get()
            />
        </label>
    }
}
