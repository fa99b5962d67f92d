use tavolo::utils::jwt::{create_access_token, verify_token};
use tavolo_config::JwtConfig;

fn config(secret: &str) -> JwtConfig {
    JwtConfig {
        secret: secret.to_string(),
        access_token_expiry: 3600,
    }
}

#[test]
fn tokens_round_trip_role_and_branch() {
    let jwt_config = config("unit-secret");
    let token = create_access_token("user-1", "manager", "main-street", &jwt_config).unwrap();

    let claims = verify_token(&token, &jwt_config).unwrap();
    assert_eq!(claims.sub, "user-1");
    assert_eq!(claims.role, "manager");
    assert_eq!(claims.branch, "main-street");
    assert!(claims.exp > claims.iat);
}

#[test]
fn tokens_signed_with_another_secret_are_rejected() {
    let token = create_access_token("user-1", "manager", "main-street", &config("one")).unwrap();
    assert!(verify_token(&token, &config("two")).is_err());
}

#[test]
fn garbage_tokens_are_rejected() {
    assert!(verify_token("definitely-not-a-jwt", &config("unit-secret")).is_err());
}
