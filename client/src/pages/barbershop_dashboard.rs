//! Barbershop dashboard: today's agenda, catalog, staff and appointments.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::app_header::AppHeader;
use crate::state::booking::{
    AppointmentOrder, BARBERS, BarbershopTab, DayStats, SERVICES, format_price, ordered, shop_agenda,
};

#[component]
pub fn BarbershopDashboardPage() -> impl IntoView {
    let tab = RwSignal::new(BarbershopTab::default());
    let order = RwSignal::new(AppointmentOrder::default());
    let agenda = shop_agenda();
    let stats = DayStats::from_appointments(&agenda);

    let tabs = BarbershopTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button class="tabs__tab" class:tabs__tab--active=move || tab.get() == t on:click=move |_| tab.set(t)>
                    {t.label()}
                </button>
            }
        })
        .collect_view();

    let body = move || match tab.get() {
        BarbershopTab::Agenda => view! {
            <section class="panel">
                <h2>"Today"</h2>
                <p class="panel__meta">
                    {format!("{} appointments, {} in progress, {} pending", stats.total, stats.in_progress, stats.pending)}
                </p>
                <ul class="appointment-list">
                    {shop_agenda()
                        .into_iter()
                        .map(|a| {
                            view! {
                                <li class="appointment">
                                    <span class="appointment__time">{a.time}</span>
                                    <span class="appointment__service">{format!("{} · {}", a.client, a.service)}</span>
                                    <span class="appointment__meta">{a.barber}</span>
                                    <span class=a.status.badge_class()>{a.status.label()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        }
        .into_any(),
        BarbershopTab::Services => view! {
            <section class="panel">
                <h2>"Services"</h2>
                <ul class="catalog-list">
                    {SERVICES
                        .iter()
                        .map(|s| {
                            view! {
                                <li class="catalog-item">
                                    <span>{s.name}</span>
                                    <span>{format!("{} · {} min", format_price(s.price), s.duration_min)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        }
        .into_any(),
        BarbershopTab::Barbers => view! {
            <section class="panel">
                <h2>"Barbers"</h2>
                <ul class="catalog-list">
                    {BARBERS
                        .iter()
                        .map(|b| {
                            view! {
                                <li class="catalog-item">
                                    <span>{b.name}</span>
                                    <span>{b.schedule}</span>
                                    <span class="catalog-item__tags">{b.services.join(", ")}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        }
        .into_any(),
        BarbershopTab::Appointments => view! {
            <section class="panel">
                <h2>"Appointments"</h2>
                <div class="panel__actions">
                    <button
                        class="button button--outline"
                        class:button--active=move || order.get() == AppointmentOrder::ByTime
                        on:click=move |_| order.set(AppointmentOrder::ByTime)
                    >
                        "By time"
                    </button>
                    <button
                        class="button button--outline"
                        class:button--active=move || order.get() == AppointmentOrder::ByBarber
                        on:click=move |_| order.set(AppointmentOrder::ByBarber)
                    >
                        "By barber"
                    </button>
                </div>
                <ul class="appointment-list">
                    {move || {
                        ordered(&shop_agenda(), order.get())
                            .into_iter()
                            .map(|a| {
                                view! {
                                    <li class="appointment">
                                        <span class="appointment__time">{a.time}</span>
                                        <span class="appointment__service">{format!("{} · {}", a.client, a.service)}</span>
                                        <span class="appointment__meta">{a.barber}</span>
                                        <span class=a.status.badge_class()>{a.status.label()}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>
        }
        .into_any(),
    };

    view! {
        <div class="dashboard">
            <AppHeader title="Barbershop"/>
            <main class="dashboard__body">
                <nav class="tabs">{tabs}</nav>
                {body}
            </main>
        </div>
    }
}
