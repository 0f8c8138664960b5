use super::*;

#[test]
fn register_request_uses_snake_case_field_names() {
    let req = RegisterRequest {
        name: "Budi".to_owned(),
        email: "budi@example.com".to_owned(),
        gender: "male".to_owned(),
        country: "Indonesia".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
        agree_terms: true,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["confirm_password"], "secret");
    assert_eq!(value["agree_terms"], true);
    assert_eq!(value.as_object().unwrap().len(), 7);
}

#[test]
fn login_request_serializes_email_and_password_only() {
    let req = LoginRequest { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"email": "a@b.c", "password": "pw"})
    );
}

#[test]
fn auth_response_tolerates_missing_fields() {
    let resp: AuthResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(resp.success);
    assert_eq!(resp.message, "");

    let resp: AuthResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp, AuthResponse::default());
}

#[test]
fn failure_builds_unsuccessful_envelope() {
    let resp = AuthResponse::failure("nope");
    assert_eq!(
        serde_json::to_value(&resp).unwrap(),
        serde_json::json!({"success": false, "message": "nope"})
    );
}

#[test]
fn typed_whitespace_reaches_the_wire_untouched() {
    let req = LoginRequest { email: " budi@example.com ".to_owned(), password: " pw ".to_owned() };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["email"], " budi@example.com ");
    assert_eq!(value["password"], " pw ");
}
