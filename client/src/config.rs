//! Identity backend endpoint configuration.
//!
//! Values are baked in at compile time so the WASM bundle needs no runtime
//! config fetch:
//! - `BARBERBOOK_BACKEND_URL`: base URL, default `http://localhost:54321`
//! - `BARBERBOOK_BACKEND_ANON_KEY`: public API key sent as `apikey`
//! - `BARBERBOOK_SYNC_CONFIG`: optional JSON for [`SyncConfig`]

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use barberbook::SyncConfig;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:54321";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub sync: SyncConfig,
}

impl BackendConfig {
    /// Build the config from compile-time environment values.
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("BARBERBOOK_BACKEND_URL"),
            option_env!("BARBERBOOK_BACKEND_ANON_KEY"),
            option_env!("BARBERBOOK_SYNC_CONFIG"),
        )
    }

    fn from_parts(url: Option<&str>, anon_key: Option<&str>, sync: Option<&str>) -> Self {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_owned();
        let sync = match sync {
            Some(raw) => SyncConfig::from_json(raw).unwrap_or_else(|e| {
                log::warn!("ignoring invalid BARBERBOOK_SYNC_CONFIG: {e}");
                SyncConfig::default()
            }),
            None => SyncConfig::default(),
        };
        Self { url, anon_key: anon_key.unwrap_or_default().to_owned(), sync }
    }

    /// First host label of the backend URL (`abcd` for `https://abcd.example.co`).
    pub fn project_ref(&self) -> &str {
        let host = self.url.split_once("://").map_or(self.url.as_str(), |(_, rest)| rest);
        let host = host.split(['/', ':']).next().unwrap_or(host);
        host.split('.').next().unwrap_or(host)
    }

    /// `localStorage` key holding the persisted session.
    pub fn auth_storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref())
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }

    pub fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.url, path.trim_start_matches('/'))
    }
}
