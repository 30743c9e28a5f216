//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod clock;
pub mod storage;
