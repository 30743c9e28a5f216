//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome (header, loading and message lines)
//! and the `ProtectedRoute` wrapper, reading the auth context provided by the
//! root component.

pub mod app_header;
pub mod loading;
pub mod message_line;
pub mod protected_route;
