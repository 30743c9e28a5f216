use barberbook::AuthError;

use super::*;

fn filled() -> RegisterForm {
    RegisterForm {
        name: "Ana Souza".to_owned(),
        phone: "11 99999-0000".to_owned(),
        address: "Rua Augusta 10".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret".to_owned(),
    }
}

#[test]
fn client_request_carries_phone_only() {
    let request = filled().into_request(Role::Client);
    assert_eq!(request.profile.role, Role::Client);
    assert_eq!(request.profile.phone.as_deref(), Some("11 99999-0000"));
    assert_eq!(request.profile.address, None);
    assert_eq!(request.email, "ana@example.com");
}

#[test]
fn barbershop_request_carries_address_only() {
    let request = filled().into_request(Role::Barbershop);
    assert_eq!(request.profile.role, Role::Barbershop);
    assert_eq!(request.profile.phone, None);
    assert_eq!(request.profile.address.as_deref(), Some("Rua Augusta 10"));
}

#[test]
fn empty_role_field_fails_validation() {
    let form = RegisterForm { phone: "  ".to_owned(), ..filled() };
    assert_eq!(form.into_request(Role::Client).validated(), Err(AuthError::InvalidInput("Phone is required.")));

    let form = RegisterForm { address: String::new(), ..filled() };
    assert_eq!(form.into_request(Role::Barbershop).validated(), Err(AuthError::InvalidInput("Address is required.")));
}

#[test]
fn complete_form_validates() {
    assert!(filled().into_request(Role::Barbershop).validated().is_ok());
}
