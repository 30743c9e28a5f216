//! Barber dashboard: work through today's appointments.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::state::booking::{AppointmentStatus, DayStats, barber_agenda, complete_service, start_service};

#[component]
pub fn BarberDashboardPage() -> impl IntoView {
    let agenda = RwSignal::new(barber_agenda());
    let stats = Memo::new(move |_| agenda.with(|a| DayStats::from_appointments(a)));

    let advance = move |id: &'static str, status: AppointmentStatus| {
        agenda.update(|a| {
            let changed = match status {
                AppointmentStatus::Confirmed => start_service(a, id),
                AppointmentStatus::InProgress => complete_service(a, id),
                AppointmentStatus::Completed => false,
            };
            if changed {
                log::debug!("appointment {id} advanced from {status:?}");
            }
        });
    };

    let stat = move |label: &'static str, value: fn(&DayStats) -> usize| {
        view! {
            <div class="stat">
                <span class="stat__value">{move || stats.with(value)}</span>
                <span class="stat__label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="dashboard">
            <AppHeader title="Barber"/>
            <main class="dashboard__body">
                <section class="stats">
                    {stat("Today", |s| s.total)}
                    {stat("Completed", |s| s.completed)}
                    {stat("In progress", |s| s.in_progress)}
                    {stat("Pending", |s| s.pending)}
                </section>
                <section class="panel">
                    <h2>"Today's appointments"</h2>
                    <ul class="appointment-list">
                        <For each=move || agenda.get() key=|a| (a.id, a.status) let:a>
                            <li class="appointment">
                                <span class="appointment__time">{a.time}</span>
                                <span class="appointment__service">{format!("{} · {}", a.client, a.service)}</span>
                                <span class=a.status.badge_class()>{a.status.label()}</span>
                                {a.status.next_action().map(|label| {
                                    view! {
                                        <button class="button" on:click=move |_| advance(a.id, a.status)>
                                            {label}
                                        </button>
                                    }
                                })}
                            </li>
                        </For>
                    </ul>
                </section>
            </main>
        </div>
    }
}
