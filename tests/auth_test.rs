//! Authorization tests: token verification, the role gate and the
//! identity check shared by group mutations and uploads.

mod common;

use jsonwebtoken::{EncodingKey, Header};

use slides::auth::gate;
use slides::auth::session::Role;
use slides::auth::token::{Claims, TokenVerifier};
use slides::messages;
use slides::result::ErrorKind;

use common::*;

#[test]
fn test_verify_token_roundtrip_claims() {
    let claims = Claims {
        id: "user9".to_string(),
        role: Some("admin".to_string()),
        speaker_id: Some("spk1".to_string()),
        exp: None,
    };
    let token = jsonwebtoken::encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes()))
        .expect("sign");

    let verified = TokenVerifier::new(SECRET).verify(&token).expect("verify");
    assert_eq!(verified, claims);
}

#[test]
fn test_verify_token_wrong_secret() {
    let token = token_with_secret("user9", "another-secret");
    assert!(TokenVerifier::new(SECRET).verify(&token).is_err());
}

#[test]
fn test_verify_token_expired() {
    let claims = Claims {
        id: "user9".to_string(),
        role: None,
        speaker_id: None,
        exp: Some((chrono::Utc::now().timestamp() - 3600) as u64),
    };
    let token = jsonwebtoken::encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes()))
        .expect("sign");
    assert!(TokenVerifier::new(SECRET).verify(&token).is_err());
}

#[test]
fn test_verify_token_garbage() {
    assert!(TokenVerifier::new(SECRET).verify("not.a.token").is_err());
}

#[test]
fn test_role_parsing() {
    assert_eq!(Role::from("admin"), Role::Admin);
    assert_eq!(Role::from("user"), Role::User);
    assert_eq!(Role::from("speaker"), Role::Other("speaker".to_string()));
    assert_eq!(Role::Other("speaker".to_string()).as_str(), "speaker");

    let json = serde_json::to_value(Role::Admin).unwrap();
    assert_eq!(json, "admin");
    let parsed: Role = serde_json::from_value(serde_json::json!("member")).unwrap();
    assert_eq!(parsed, Role::Other("member".to_string()));
}

#[test]
fn test_principal_missing() {
    let err = gate::principal(None, messages::NO_PERMISSION).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthenticated);
    assert_eq!(err.message, messages::NO_PERMISSION);
}

#[test]
fn test_require_admin() {
    assert!(gate::require_admin(&admin()).is_ok());

    for role in [Role::User, Role::Other("speaker".to_string())] {
        let err = gate::require_admin(&session_for("u1", role)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.message, messages::NO_PERMISSION);
    }
}

#[test]
fn test_require_editor() {
    assert!(gate::require_editor(&admin()).is_ok());
    assert!(gate::require_editor(&session_for("s1", Role::Other("speaker".to_string()))).is_ok());

    let err = gate::require_editor(&session_for("u1", Role::User)).unwrap_err();
    assert_eq!(err.message, messages::LOGIN_REQUIRED);
}

#[test]
fn test_verify_identity_matches() {
    let tokens = TokenVerifier::new(SECRET);
    assert!(gate::verify_identity(&tokens, &admin()).is_ok());
}

#[test]
fn test_verify_identity_mismatch() {
    let tokens = TokenVerifier::new(SECRET);
    let err = gate::verify_identity(&tokens, &forged(ADMIN_ID, "intruder", Role::Admin)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
    assert_eq!(err.message, messages::ID_MISMATCH);
}

#[test]
fn test_verify_identity_bad_signature() {
    let tokens = TokenVerifier::new(SECRET);
    let mut session = admin();
    session.access_token = token_with_secret(ADMIN_ID, "leaked-other-secret");
    let err = gate::verify_identity(&tokens, &session).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthenticated);
    assert_eq!(err.message, messages::INVALID_CREDENTIAL);
}
