//! Wire DTOs for the identity backend's auth and REST endpoints.
//!
//! DESIGN
//! ======
//! Response bodies reuse the core `Session` and `ProfileRecord` shapes
//! directly; only request payloads and the error envelope live here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use barberbook::NewProfile;
use serde::{Deserialize, Serialize};

/// Body of `POST /auth/v1/token?grant_type=password`.
#[derive(Debug, Serialize)]
pub struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/v1/token?grant_type=refresh_token`.
#[derive(Debug, Serialize)]
pub struct RefreshGrant<'a> {
    pub refresh_token: &'a str,
}

/// Body of `POST /auth/v1/signup`; `data` becomes the account metadata.
#[derive(Debug, Serialize)]
pub struct SignUpPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: &'a NewProfile,
}

/// Error envelope. The auth and REST services name the human-readable field
/// differently, so every known spelling is accepted.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best human-readable message, if the body carried one.
    pub fn into_message(self) -> Option<String> {
        [self.msg, self.error_description, self.message, self.error]
            .into_iter()
            .flatten()
            .map(|m| m.trim().to_owned())
            .find(|m| !m.is_empty())
    }
}
