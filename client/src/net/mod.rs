//! Networking modules for the identity backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the session core's `IdentityBackend` over HTTP and
//! `types` defines the request payloads and error envelope.

pub mod api;
pub mod types;
