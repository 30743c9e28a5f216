//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Public pages bounce signed-in visitors to their
//! dashboard; dashboards are wrapped in `ProtectedRoute` by the router.

pub mod barber_dashboard;
pub mod barbershop_dashboard;
pub mod client_dashboard;
pub mod login;
pub mod not_found;
pub mod register;
pub mod welcome;
