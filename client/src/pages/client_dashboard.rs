//! Client dashboard: book a service and review past appointments.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::message_line::{MessageLine, Notice};
use crate::state::booking::{
    AppointmentOrder, BARBERS, BookingDraft, SERVICES, TIME_SLOTS, client_history, format_price, ordered,
};
use crate::util::clock::today_iso;

#[component]
pub fn ClientDashboardPage() -> impl IntoView {
    let draft = RwSignal::new(BookingDraft::default());
    let show_history = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);
    let today = today_iso();
    let min_date = today.clone();

    let on_confirm = move |_| match draft.get().confirm(&today) {
        Ok(confirmation) => {
            log::info!("booked {} on {} {}", confirmation.service.name, confirmation.date, confirmation.time);
            notice.set(Some(Notice::success(confirmation.message())));
            draft.set(BookingDraft::default());
        }
        Err(message) => notice.set(Some(Notice::error(message))),
    };

    let services = SERVICES
        .iter()
        .map(|service| {
            let selected = move || draft.with(|d| d.service_id.as_deref() == Some(service.id));
            view! {
                <button
                    class="service-card"
                    class:service-card--selected=selected
                    on:click=move |_| draft.update(|d| d.service_id = Some(service.id.to_owned()))
                >
                    <span class="service-card__name">{service.name}</span>
                    <span class="service-card__meta">
                        {format!("{} · {} min", format_price(service.price), service.duration_min)}
                    </span>
                </button>
            }
        })
        .collect_view();

    let slots = TIME_SLOTS
        .iter()
        .map(|slot| {
            let selected = move || draft.with(|d| d.time.as_deref() == Some(*slot));
            view! {
                <button
                    class="slot"
                    class:slot--selected=selected
                    on:click=move |_| draft.update(|d| d.time = Some((*slot).to_owned()))
                >
                    {*slot}
                </button>
            }
        })
        .collect_view();

    let summary = move || {
        let d = draft.get();
        d.has_selection().then(|| {
            let service = d.service().map_or("-", |s| s.name);
            let price = d.service().map(|s| format_price(s.price)).unwrap_or_default();
            let barber = d.barber().map_or("Any barber", |b| b.name);
            view! {
                <div class="booking-summary">
                    <h3>"Summary"</h3>
                    <p>{format!("Service: {service} {price}")}</p>
                    <p>{format!("Barber: {barber}")}</p>
                    <p>{format!("Date: {}", d.date.clone().unwrap_or_default())}</p>
                    <p>{format!("Time: {}", d.time.clone().unwrap_or_default())}</p>
                </div>
            }
        })
    };

    let history = move || {
        ordered(&client_history(), AppointmentOrder::ByTime)
            .into_iter()
            .rev()
            .map(|a| {
                view! {
                    <li class="appointment">
                        <span class="appointment__service">{a.service}</span>
                        <span class="appointment__meta">{format!("{} · {} {}", a.barber, a.date, a.time)}</span>
                        <span class=a.status.badge_class()>{a.status.label()}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="dashboard">
            <AppHeader title="Client"/>
            <main class="dashboard__body">
                <section class="panel">
                    <h2>"Choose a service"</h2>
                    <div class="service-grid">{services}</div>
                </section>
                <section class="panel">
                    <h2>"Barber"</h2>
                    <select
                        class="select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.barber_id = (!value.is_empty()).then_some(value));
                        }
                        prop:value=move || draft.with(|d| d.barber_id.clone().unwrap_or_default())
                    >
                        <option value="">"Any barber"</option>
                        {BARBERS
                            .iter()
                            .map(|b| view! { <option value=b.id>{b.name}</option> })
                            .collect_view()}
                    </select>
                </section>
                <section class="panel">
                    <h2>"Date and time"</h2>
                    <input
                        class="login-input"
                        type="date"
                        min=min_date
                        prop:value=move || draft.with(|d| d.date.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.date = (!value.is_empty()).then_some(value));
                        }
                    />
                    <div class="slot-grid">{slots}</div>
                </section>
                {summary}
                <button class="button" on:click=on_confirm>
                    "Confirm booking"
                </button>
                <MessageLine notice=notice/>
                <section class="panel">
                    <button class="button button--outline" on:click=move |_| show_history.update(|v| *v = !*v)>
                        {move || if show_history.get() { "Hide history" } else { "Show history" }}
                    </button>
                    <Show when=move || show_history.get()>
                        <ul class="appointment-list">{history}</ul>
                    </Show>
                </section>
            </main>
        </div>
    }
}
