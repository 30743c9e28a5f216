use super::*;
use barberbook::types::{Identity, IdentityId, ProfileDetails, RoleProfile};

fn identity(email: Option<&str>) -> Identity {
    Identity { id: IdentityId::new("u1"), email: email.map(str::to_owned) }
}

#[test]
fn greeting_prefers_profile_name() {
    let state = SessionState {
        identity: Some(identity(Some("ana@example.com"))),
        profile: Some(RoleProfile {
            id: IdentityId::new("u1"),
            name: "Ana".to_owned(),
            details: ProfileDetails::Client { phone: None },
        }),
        ..SessionState::signed_out()
    };
    assert_eq!(greeting(&state), "Hello, Ana!");
}

#[test]
fn greeting_falls_back_to_email_then_generic() {
    let state = SessionState { identity: Some(identity(Some("ana@example.com"))), ..SessionState::signed_out() };
    assert_eq!(greeting(&state), "Hello, ana@example.com!");

    let state = SessionState { identity: Some(identity(None)), ..SessionState::signed_out() };
    assert_eq!(greeting(&state), "Hello!");
}

#[test]
fn profile_error_text_only_without_profile() {
    let mut state = SessionState {
        identity: Some(identity(None)),
        profile_error: Some("profile request failed: timeout".to_owned()),
        ..SessionState::signed_out()
    };
    assert_eq!(
        profile_error_text(&state).as_deref(),
        Some("We could not load your profile (profile request failed: timeout).")
    );

    state.profile =
        Some(RoleProfile { id: IdentityId::new("u1"), name: String::new(), details: ProfileDetails::Barber { barbershop_id: None } });
    assert_eq!(profile_error_text(&state), None);
}
