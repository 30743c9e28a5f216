//! Catalog data and local scheduling state for the role dashboards.
//!
//! DESIGN
//! ======
//! The dashboards run on a fixed in-memory catalog; nothing here talks to the
//! backend. Keeping the rules (booking validation, status transitions, daily
//! stats) as plain functions lets them be tested without a reactive runtime.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub duration_min: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Barber {
    pub id: &'static str,
    pub name: &'static str,
    pub schedule: &'static str,
    pub services: &'static [&'static str],
}

pub static SERVICES: [Service; 4] = [
    Service { id: "1", name: "Haircut", price: 25, duration_min: 30 },
    Service { id: "2", name: "Beard", price: 15, duration_min: 20 },
    Service { id: "3", name: "Haircut + Beard", price: 35, duration_min: 45 },
    Service { id: "4", name: "Eyebrows", price: 10, duration_min: 15 },
];

pub static BARBERS: [Barber; 3] = [
    Barber {
        id: "1",
        name: "João Silva",
        schedule: "Mon-Fri: 8am-6pm",
        services: &["Haircut", "Beard", "Haircut + Beard"],
    },
    Barber { id: "2", name: "Pedro Santos", schedule: "Mon-Sat: 9am-7pm", services: &["Haircut", "Haircut + Beard"] },
    Barber { id: "3", name: "Carlos Lima", schedule: "Tue-Sat: 8am-5pm", services: &["Haircut", "Beard", "Eyebrows"] },
];

pub static TIME_SLOTS: [&str; 13] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00",
];

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn find_barber(id: &str) -> Option<&'static Barber> {
    BARBERS.iter().find(|b| b.id == id)
}

pub fn format_price(price: u32) -> String {
    format!("${price}")
}

// =============================================================================
// Appointments
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    Confirmed,
    InProgress,
    Completed,
}

impl AppointmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }

    /// Button label for the next step, if the appointment can advance.
    pub fn next_action(self) -> Option<&'static str> {
        match self {
            Self::Confirmed => Some("Start"),
            Self::InProgress => Some("Complete"),
            Self::Completed => None,
        }
    }

    /// CSS modifier for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Confirmed => "badge badge--confirmed",
            Self::InProgress => "badge badge--in-progress",
            Self::Completed => "badge badge--completed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Appointment {
    pub id: &'static str,
    pub client: &'static str,
    pub service: &'static str,
    pub barber: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub status: AppointmentStatus,
}

/// Past and upcoming bookings shown in the client's history.
pub fn client_history() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1",
            client: "",
            service: "Haircut + Beard",
            barber: "João Silva",
            date: "2024-06-10",
            time: "14:00",
            status: AppointmentStatus::Confirmed,
        },
        Appointment {
            id: "2",
            client: "",
            service: "Haircut",
            barber: "Pedro Santos",
            date: "2024-05-28",
            time: "10:30",
            status: AppointmentStatus::Completed,
        },
    ]
}

/// Today's appointments across the shop.
pub fn shop_agenda() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1",
            client: "João Silva",
            service: "Haircut + Beard",
            barber: "Pedro Santos",
            date: "",
            time: "09:00",
            status: AppointmentStatus::Confirmed,
        },
        Appointment {
            id: "2",
            client: "Maria Costa",
            service: "Haircut",
            barber: "Carlos Lima",
            date: "",
            time: "10:30",
            status: AppointmentStatus::InProgress,
        },
        Appointment {
            id: "3",
            client: "Roberto Oliveira",
            service: "Beard",
            barber: "João Silva",
            date: "",
            time: "14:00",
            status: AppointmentStatus::Confirmed,
        },
    ]
}

/// Today's appointments for a single barber.
pub fn barber_agenda() -> Vec<Appointment> {
    let slots = [
        ("1", "João Silva", "Haircut + Beard", "09:00", AppointmentStatus::Confirmed),
        ("2", "Maria Costa", "Haircut", "10:30", AppointmentStatus::InProgress),
        ("3", "Roberto Oliveira", "Beard", "14:00", AppointmentStatus::Confirmed),
        ("4", "Ana Souza", "Haircut", "15:30", AppointmentStatus::Confirmed),
    ];
    slots
        .into_iter()
        .map(|(id, client, service, time, status)| Appointment {
            id,
            client,
            service,
            barber: "",
            date: "",
            time,
            status,
        })
        .collect()
}

/// Move a confirmed appointment to in-progress. Returns whether it changed.
pub fn start_service(appointments: &mut [Appointment], id: &str) -> bool {
    transition(appointments, id, AppointmentStatus::Confirmed, AppointmentStatus::InProgress)
}

/// Move an in-progress appointment to completed. Returns whether it changed.
pub fn complete_service(appointments: &mut [Appointment], id: &str) -> bool {
    transition(appointments, id, AppointmentStatus::InProgress, AppointmentStatus::Completed)
}

fn transition(appointments: &mut [Appointment], id: &str, from: AppointmentStatus, to: AppointmentStatus) -> bool {
    match appointments.iter_mut().find(|a| a.id == id) {
        Some(appointment) if appointment.status == from => {
            appointment.status = to;
            true
        }
        _ => false,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

impl DayStats {
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        let count = |status| appointments.iter().filter(|a| a.status == status).count();
        Self {
            total: appointments.len(),
            completed: count(AppointmentStatus::Completed),
            in_progress: count(AppointmentStatus::InProgress),
            pending: count(AppointmentStatus::Confirmed),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppointmentOrder {
    #[default]
    ByTime,
    ByBarber,
}

/// Copy of `appointments` in the requested display order.
pub fn ordered(appointments: &[Appointment], order: AppointmentOrder) -> Vec<Appointment> {
    let mut sorted = appointments.to_vec();
    match order {
        AppointmentOrder::ByTime => sorted.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time))),
        AppointmentOrder::ByBarber => sorted.sort_by(|a, b| (a.barber, a.time).cmp(&(b.barber, b.time))),
    }
    sorted
}

// =============================================================================
// Client booking form
// =============================================================================

/// In-progress booking on the client dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub service_id: Option<String>,
    pub barber_id: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub service: &'static Service,
    pub barber: Option<&'static Barber>,
    pub date: String,
    pub time: String,
}

impl BookingConfirmation {
    pub fn message(&self) -> String {
        format!("Your appointment is booked for {} at {}.", self.date, self.time)
    }
}

pub const BOOKING_INCOMPLETE: &str = "Please fill in all required fields.";
pub const BOOKING_IN_PAST: &str = "Please choose a date from today onward.";

impl BookingDraft {
    /// Whether the summary card should be shown.
    pub fn has_selection(&self) -> bool {
        self.service_id.is_some() || self.date.is_some() || self.time.is_some()
    }

    pub fn service(&self) -> Option<&'static Service> {
        self.service_id.as_deref().and_then(find_service)
    }

    pub fn barber(&self) -> Option<&'static Barber> {
        self.barber_id.as_deref().and_then(find_barber)
    }

    /// Validate the draft. Service, date and time are required; the barber is
    /// optional. `today` is `YYYY-MM-DD`, which orders lexicographically.
    ///
    /// # Errors
    ///
    /// Returns the message to show the user.
    pub fn confirm(&self, today: &str) -> Result<BookingConfirmation, &'static str> {
        let (Some(service), Some(date), Some(time)) = (self.service(), self.date.as_deref(), self.time.as_deref())
        else {
            return Err(BOOKING_INCOMPLETE);
        };
        if !TIME_SLOTS.contains(&time) {
            return Err(BOOKING_INCOMPLETE);
        }
        if date < today {
            return Err(BOOKING_IN_PAST);
        }
        Ok(BookingConfirmation { service, barber: self.barber(), date: date.to_owned(), time: time.to_owned() })
    }
}

// =============================================================================
// Barbershop tabs
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarbershopTab {
    #[default]
    Agenda,
    Services,
    Barbers,
    Appointments,
}

impl BarbershopTab {
    pub const ALL: [BarbershopTab; 4] = [Self::Agenda, Self::Services, Self::Barbers, Self::Appointments];

    pub fn label(self) -> &'static str {
        match self {
            Self::Agenda => "Agenda",
            Self::Services => "Services",
            Self::Barbers => "Barbers",
            Self::Appointments => "Appointments",
        }
    }
}
