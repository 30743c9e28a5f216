use super::*;
use barberbook::Role;

#[test]
fn error_body_prefers_msg_then_description() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Invalid login credentials"));

    let body: ErrorBody = serde_json::from_str(r#"{"code":422,"msg":"User already registered"}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("User already registered"));
}

#[test]
fn error_body_ignores_blank_fields() {
    let body: ErrorBody = serde_json::from_str(r#"{"msg":"  ","message":"JWT expired"}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("JWT expired"));
    assert_eq!(ErrorBody::default().into_message(), None);
}

#[test]
fn sign_up_payload_nests_profile_metadata() {
    let profile = NewProfile {
        role: Role::Barbershop,
        name: "Navalha".to_owned(),
        phone: None,
        address: Some("Rua Augusta 10".to_owned()),
    };
    let payload = SignUpPayload { email: "shop@example.com", password: "pw", data: &profile };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "email": "shop@example.com",
            "password": "pw",
            "data": { "user_type": "barbershop", "name": "Navalha", "address": "Rua Augusta 10" }
        })
    );
}
