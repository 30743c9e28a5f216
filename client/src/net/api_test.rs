use super::*;
use barberbook::Role;
use barberbook::types::ProfileDetails;

fn session(expires_at: Option<i64>) -> Session {
    serde_json::from_value(serde_json::json!({
        "access_token": "at",
        "refresh_token": "rt",
        "expires_at": expires_at,
        "user": { "id": "u1", "email": "u1@example.com" }
    }))
    .unwrap()
}

#[test]
fn endpoint_paths_format_expected_queries() {
    assert_eq!(PASSWORD_GRANT_PATH, "token?grant_type=password");
    assert_eq!(REFRESH_GRANT_PATH, "token?grant_type=refresh_token");
    assert_eq!(logout_path(SignOutScope::Global), "logout?scope=global");
    assert_eq!(logout_path(SignOutScope::Local), "logout?scope=local");
    assert_eq!(profile_path(&IdentityId::new("9f1c")), "profiles?id=eq.9f1c&select=*");
}

#[test]
fn is_success_covers_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(301));
    assert!(!is_success(400));
}

#[test]
fn auth_error_uses_service_message() {
    let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
    assert_eq!(auth_error(400, body), AuthError::Rejected("Invalid login credentials".to_owned()));
}

#[test]
fn auth_error_falls_back_to_status_and_flags_server_errors() {
    assert_eq!(auth_error(422, "not json"), AuthError::Rejected("request failed: 422".to_owned()));
    assert_eq!(auth_error(503, ""), AuthError::Network("request failed: 503".to_owned()));
}

#[test]
fn needs_refresh_applies_margin() {
    assert!(!needs_refresh(&session(None), 1_000));
    assert!(!needs_refresh(&session(Some(2_000)), 1_000));
    assert!(needs_refresh(&session(Some(1_020)), 1_000));
    assert!(needs_refresh(&session(Some(900)), 1_000));
}

#[test]
fn bearer_plan_refreshes_expiring_sessions_before_use() {
    assert_eq!(bearer_plan(None, 1_000), BearerPlan::Anonymous);
    assert_eq!(bearer_plan(Some(session(Some(2_000))), 1_000), BearerPlan::Use("at".to_owned()));
    assert_eq!(bearer_plan(Some(session(None)), 1_000), BearerPlan::Use("at".to_owned()));
    assert_eq!(bearer_plan(Some(session(Some(1_010))), 1_000), BearerPlan::Refresh(session(Some(1_010))));
}

#[test]
fn refresh_event_reports_new_tokens_or_sign_out() {
    let refreshed = refresh_event(Some(session(Some(5_000))));
    assert_eq!(refreshed.kind, AuthEventKind::TokenRefreshed);
    assert_eq!(refreshed.identity().map(|i| i.id.clone()), Some(IdentityId::new("u1")));

    let rejected = refresh_event(None);
    assert_eq!(rejected, AuthEvent::new(AuthEventKind::SignedOut, None));
}

#[test]
fn session_from_sign_up_distinguishes_user_only_reply() {
    let with_session = r#"{"access_token":"at","refresh_token":"rt","expires_in":3600,"user":{"id":"u1"}}"#;
    assert_eq!(session_from_sign_up(with_session).map(|s| s.identity.id), Some(IdentityId::new("u1")));

    let user_only = r#"{"id":"u1","email":"u1@example.com","confirmation_sent_at":"2024-06-10T12:00:00Z"}"#;
    assert!(session_from_sign_up(user_only).is_none());
}

#[test]
fn parse_profile_rows_maps_role_details() {
    let id = IdentityId::new("u1");
    let body = r#"[{"id":"u1","user_type":"barbershop","name":"Navalha","address":"Rua Augusta 10"}]"#;
    let profile = parse_profile_rows(&id, body).unwrap();
    assert_eq!(profile.role(), Some(Role::Barbershop));
    assert_eq!(profile.name, "Navalha");
    assert_eq!(profile.details, ProfileDetails::Barbershop { address: Some("Rua Augusta 10".to_owned()) });
}

#[test]
fn parse_profile_rows_reports_missing_and_malformed() {
    let id = IdentityId::new("u1");
    assert_eq!(parse_profile_rows(&id, "[]"), Err(ProfileError::NotFound(id.clone())));
    assert!(matches!(parse_profile_rows(&id, "{\"oops\":1}"), Err(ProfileError::Malformed(_))));
}

#[test]
fn parse_profile_rows_keeps_unknown_role_tag() {
    let id = IdentityId::new("u1");
    let profile = parse_profile_rows(&id, r#"[{"id":"u1","user_type":"admin","name":"Root"}]"#).unwrap();
    assert_eq!(profile.role(), None);
    assert_eq!(profile.role_tag(), "admin");
}
