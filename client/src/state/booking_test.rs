use super::*;

fn draft(service: Option<&str>, date: Option<&str>, time: Option<&str>) -> BookingDraft {
    BookingDraft {
        service_id: service.map(str::to_owned),
        barber_id: None,
        date: date.map(str::to_owned),
        time: time.map(str::to_owned),
    }
}

#[test]
fn catalog_has_expected_shape() {
    assert_eq!(SERVICES.len(), 4);
    assert_eq!(BARBERS.len(), 3);
    assert_eq!(TIME_SLOTS.len(), 13);
    assert_eq!(find_service("3").map(|s| s.price), Some(35));
    assert_eq!(find_barber("2").map(|b| b.name), Some("Pedro Santos"));
    assert!(find_service("9").is_none());
    assert_eq!(format_price(25), "$25");
}

#[test]
fn empty_draft_has_no_summary() {
    assert!(!BookingDraft::default().has_selection());
    assert!(draft(None, None, Some("09:00")).has_selection());
}

#[test]
fn confirm_requires_service_date_and_time() {
    let today = "2024-06-01";
    assert_eq!(draft(None, Some("2024-06-10"), Some("09:00")).confirm(today), Err(BOOKING_INCOMPLETE));
    assert_eq!(draft(Some("1"), None, Some("09:00")).confirm(today), Err(BOOKING_INCOMPLETE));
    assert_eq!(draft(Some("1"), Some("2024-06-10"), None).confirm(today), Err(BOOKING_INCOMPLETE));
    assert_eq!(draft(Some("1"), Some("2024-06-10"), Some("12:00")).confirm(today), Err(BOOKING_INCOMPLETE));
}

#[test]
fn confirm_rejects_past_dates() {
    assert_eq!(draft(Some("1"), Some("2024-05-31"), Some("09:00")).confirm("2024-06-01"), Err(BOOKING_IN_PAST));
}

#[test]
fn confirm_accepts_today_with_optional_barber() {
    let mut booking = draft(Some("2"), Some("2024-06-01"), Some("17:00"));
    booking.barber_id = Some("3".to_owned());
    let confirmation = booking.confirm("2024-06-01").unwrap();
    assert_eq!(confirmation.service.name, "Beard");
    assert_eq!(confirmation.barber.map(|b| b.name), Some("Carlos Lima"));
    assert_eq!(confirmation.message(), "Your appointment is booked for 2024-06-01 at 17:00.");
}

#[test]
fn start_then_complete_service() {
    let mut agenda = barber_agenda();
    assert!(start_service(&mut agenda, "1"));
    assert_eq!(agenda[0].status, AppointmentStatus::InProgress);
    assert!(complete_service(&mut agenda, "1"));
    assert_eq!(agenda[0].status, AppointmentStatus::Completed);
}

#[test]
fn transitions_only_from_expected_status() {
    let mut agenda = barber_agenda();
    assert!(!complete_service(&mut agenda, "1"), "confirmed cannot jump to completed");
    assert!(!start_service(&mut agenda, "2"), "already in progress");
    assert!(!start_service(&mut agenda, "missing"));
    assert_eq!(agenda, barber_agenda());
}

#[test]
fn day_stats_count_each_status() {
    let mut agenda = barber_agenda();
    assert_eq!(DayStats::from_appointments(&agenda), DayStats { total: 4, completed: 0, in_progress: 1, pending: 3 });
    complete_service(&mut agenda, "2");
    start_service(&mut agenda, "4");
    assert_eq!(DayStats::from_appointments(&agenda), DayStats { total: 4, completed: 1, in_progress: 1, pending: 2 });
}

#[test]
fn ordered_by_barber_groups_names() {
    let sorted = ordered(&shop_agenda(), AppointmentOrder::ByBarber);
    let barbers: Vec<&str> = sorted.iter().map(|a| a.barber).collect();
    assert_eq!(barbers, vec!["Carlos Lima", "João Silva", "Pedro Santos"]);

    let by_time = ordered(&client_history(), AppointmentOrder::ByTime);
    assert_eq!(by_time[0].date, "2024-05-28");
}

#[test]
fn status_and_tab_labels() {
    assert_eq!(AppointmentStatus::InProgress.label(), "In progress");
    assert_eq!(AppointmentStatus::Completed.badge_class(), "badge badge--completed");
    assert_eq!(AppointmentStatus::Confirmed.next_action(), Some("Start"));
    assert_eq!(AppointmentStatus::InProgress.next_action(), Some("Complete"));
    assert_eq!(AppointmentStatus::Completed.next_action(), None);
    let labels: Vec<&str> = BarbershopTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Agenda", "Services", "Barbers", "Appointments"]);
}
