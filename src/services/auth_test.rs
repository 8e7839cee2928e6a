use super::*;

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_wire_values_are_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
}

#[test]
fn role_deserializes_from_backend_values() {
    assert_eq!(serde_json::from_str::<Role>(r#""admin""#).unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>(r#""user""#).unwrap(), Role::User);
}

#[test]
fn role_display_matches_wire_values() {
    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::User.to_string(), "user");
}

// =============================================================================
// User
// =============================================================================

#[test]
fn user_deserializes_backend_shape() {
    // Extra fields the backend sends (createdAt, isBlocked) are ignored.
    let json = r#"{
        "id": "u1",
        "name": "Ana Souza",
        "email": "ana@example.com",
        "phone": "+55 11 91234-5678",
        "role": "user",
        "createdAt": "2024-01-01T00:00:00Z",
        "isBlocked": false
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Ana Souza");
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.phone.as_deref(), Some("+55 11 91234-5678"));
    assert_eq!(user.role, Role::User);
}

#[test]
fn user_without_phone_deserializes() {
    let json = r#"{"id":"u2","name":"Bia","email":"bia@example.com","role":"admin"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.phone, None);
    assert_eq!(user.role, Role::Admin);
}

// =============================================================================
// TokenPair
// =============================================================================

#[test]
fn token_pair_uses_camel_case_on_the_wire() {
    let json = r#"{"accessToken":"t1","refreshToken":"r1"}"#;
    let pair: TokenPair = serde_json::from_str(json).unwrap();
    assert_eq!(pair.access_token, "t1");
    assert_eq!(pair.refresh_token, "r1");

    let back = serde_json::to_value(&pair).unwrap();
    assert_eq!(back["accessToken"], "t1");
    assert_eq!(back["refreshToken"], "r1");
}

// =============================================================================
// NewUser / RegisterReceipt
// =============================================================================

#[test]
fn new_user_serializes_registration_body() {
    let new_user = NewUser {
        name: "Ana Souza".into(),
        email: "ana@example.com".into(),
        phone: "+55 11 91234-5678".into(),
        password: "hunter2".into(),
    };
    let body = serde_json::to_value(&new_user).unwrap();
    assert_eq!(body["name"], "Ana Souza");
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["phone"], "+55 11 91234-5678");
    assert_eq!(body["password"], "hunter2");
}

#[test]
fn register_receipt_deserializes() {
    let receipt: RegisterReceipt = serde_json::from_str(r#"{"id":"u9"}"#).unwrap();
    assert_eq!(receipt.id, "u9");
}
