use super::*;
use barberbook::RetryPolicy;

#[test]
fn from_parts_defaults_to_local_backend() {
    let cfg = BackendConfig::from_parts(None, None, None);
    assert_eq!(cfg.url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.anon_key, "");
    assert_eq!(cfg.sync, SyncConfig::default());
}

#[test]
fn from_parts_trims_trailing_slash() {
    let cfg = BackendConfig::from_parts(Some("https://abcd.supabase.co/"), Some("anon"), None);
    assert_eq!(cfg.url, "https://abcd.supabase.co");
    assert_eq!(cfg.anon_key, "anon");
}

#[test]
fn from_parts_reads_sync_overrides() {
    let raw = r#"{"profile_retry":{"max_attempts":5,"initial_backoff_ms":100,"max_backoff_ms":800}}"#;
    let cfg = BackendConfig::from_parts(None, None, Some(raw));
    assert_eq!(
        cfg.sync.profile_retry,
        RetryPolicy { max_attempts: 5, initial_backoff_ms: 100, max_backoff_ms: 800 }
    );
}

#[test]
fn from_parts_falls_back_on_invalid_sync_json() {
    let cfg = BackendConfig::from_parts(None, None, Some("{not json"));
    assert_eq!(cfg.sync, SyncConfig::default());
}

#[test]
fn auth_storage_key_uses_first_host_label() {
    let cfg = BackendConfig::from_parts(Some("https://abcd.supabase.co"), None, None);
    assert_eq!(cfg.project_ref(), "abcd");
    assert_eq!(cfg.auth_storage_key(), "sb-abcd-auth-token");

    let local = BackendConfig::from_parts(None, None, None);
    assert_eq!(local.auth_storage_key(), "sb-localhost-auth-token");
}

#[test]
fn endpoint_builders_join_paths() {
    let cfg = BackendConfig::from_parts(Some("https://abcd.supabase.co"), None, None);
    assert_eq!(cfg.auth_url("/signup"), "https://abcd.supabase.co/auth/v1/signup");
    assert_eq!(cfg.rest_url("profiles"), "https://abcd.supabase.co/rest/v1/profiles");
}
