use super::*;

#[test]
fn login_tab_reads_type_parameter() {
    assert_eq!(login_tab(Some("barbershop")), Role::Barbershop);
    assert_eq!(login_tab(Some("client")), Role::Client);
    assert_eq!(login_tab(Some("barber")), Role::Barber);
}

#[test]
fn login_tab_defaults_to_client() {
    assert_eq!(login_tab(None), Role::Client);
    assert_eq!(login_tab(Some("admin")), Role::Client);
    assert_eq!(login_tab(Some("")), Role::Client);
}

#[test]
fn validate_sign_in_trims_email_and_requires_both() {
    assert_eq!(
        validate_sign_in("  ana@example.com ", "secret"),
        Ok(("ana@example.com".to_owned(), "secret".to_owned()))
    );
    assert_eq!(validate_sign_in("   ", "secret"), Err("Please fill in email and password."));
    assert_eq!(validate_sign_in("ana@example.com", ""), Err("Please fill in email and password."));
}

#[test]
fn validate_sign_in_keeps_password_whitespace() {
    assert_eq!(validate_sign_in("a@b.com", " pw "), Ok(("a@b.com".to_owned(), " pw ".to_owned())));
}

#[test]
fn submit_label_follows_tab_and_busy_state() {
    assert_eq!(submit_label(Role::Client, false), "Sign in as client");
    assert_eq!(submit_label(Role::Barbershop, false), "Sign in as barbershop");
    assert_eq!(submit_label(Role::Barbershop, true), "Signing in...");
}
