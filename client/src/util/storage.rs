//! Browser `localStorage` access for the identity adapter's token cache.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP adapter persists its session here and credential actions sweep
//! stale auth keys through the core's `TokenStorage` trait. Outside the
//! browser every call is a no-op so SSR stays deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use barberbook::TokenStorage;

/// Handle to `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTokenStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl LocalTokenStorage {
    pub fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    pub fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage rejected write for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

impl TokenStorage for LocalTokenStorage {
    fn keys(&self) -> Vec<String> {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return Vec::new();
            };
            let len = storage.length().unwrap_or(0);
            (0..len).filter_map(|i| storage.key(i).ok().flatten()).collect()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Vec::new()
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
