//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` bridges the session core into a reactive context; `booking` holds
//! the dashboards' catalog data and local scheduling state.

pub mod auth;
pub mod booking;
