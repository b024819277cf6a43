use wpsmoke::models::{AuthMode, Credentials, LoginResponse};

fn parse_login(json: &str) -> LoginResponse {
    serde_json::from_str(json).expect("login response should decode")
}

#[test]
fn keypair_session_builds_signed_token() {
    let login = parse_login(r#"{"session":{"publicKey":"pub1","secretKey":"sec1"}}"#);
    let session = login.session.unwrap();

    let creds = Credentials::from_session(&session, AuthMode::Signed).unwrap();
    let token = creds.token_with_nonce("n0nceval1", "GET", "/api/v0/songs");

    // HMAC-SHA1("pub1-n0nceval1-GET-/api/v0/songs", key="sec1")
    assert_eq!(
        token,
        "pub1:n0nceval1:332153344ee486830e1d2e7a73cb3df3847cd884"
    );
}

#[test]
fn user_id_is_the_fallback_identifier() {
    let login = parse_login(r#"{"session":{"userId":42,"secretKey":"sec1"}}"#);
    let session = login.session.unwrap();

    let creds = Credentials::from_session(&session, AuthMode::Signed).unwrap();
    match &creds {
        Credentials::Keypair { identifier, secret } => {
            assert_eq!(identifier, "42");
            assert_eq!(secret, "sec1");
        }
        other => panic!("expected keypair credentials, got {other:?}"),
    }

    let token = creds.token_with_nonce("abcde12345", "GET", "/api/v0/status");
    assert!(token.starts_with("42:abcde12345:"));
}

#[test]
fn public_key_is_preferred_over_user_id() {
    let login =
        parse_login(r#"{"session":{"userId":42,"publicKey":"pub1","secretKey":"sec1"}}"#);
    let session = login.session.unwrap();

    let creds = Credentials::from_session(&session, AuthMode::Signed).unwrap();
    match creds {
        Credentials::Keypair { identifier, .. } => assert_eq!(identifier, "pub1"),
        other => panic!("expected keypair credentials, got {other:?}"),
    }
}

#[test]
fn session_key_is_used_verbatim() {
    let login = parse_login(r#"{"session":{"key":"deadbeefcafe"}}"#);
    let session = login.session.unwrap();

    let creds = Credentials::from_session(&session, AuthMode::SessionKey).unwrap();
    assert_eq!(
        creds.token_with_nonce("ignored", "GET", "/api/v0/albums"),
        "deadbeefcafe"
    );
}

#[test]
fn fresh_token_embeds_a_default_length_nonce() {
    let creds = Credentials::Keypair {
        identifier: "pub1".to_string(),
        secret: "sec1".to_string(),
    };

    let token = creds.token("GET", "/api/v0/songs");
    let parts: Vec<&str> = token.split(':').collect();

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "pub1");
    assert_eq!(parts[1].len(), 10);
    assert_eq!(parts[2].len(), 40);
}

#[test]
fn missing_secret_key_is_an_error() {
    let login = parse_login(r#"{"session":{"publicKey":"pub1"}}"#);
    let session = login.session.unwrap();

    assert!(Credentials::from_session(&session, AuthMode::Signed).is_err());
}

#[test]
fn missing_identifier_is_an_error() {
    let login = parse_login(r#"{"session":{"secretKey":"sec1"}}"#);
    let session = login.session.unwrap();

    assert!(Credentials::from_session(&session, AuthMode::Signed).is_err());
}

#[test]
fn missing_key_is_an_error_in_session_key_mode() {
    let login = parse_login(r#"{"session":{"publicKey":"pub1","secretKey":"sec1"}}"#);
    let session = login.session.unwrap();

    assert!(Credentials::from_session(&session, AuthMode::SessionKey).is_err());
}

#[test]
fn full_session_decodes() {
    let login = parse_login(
        r#"{
            "error": null,
            "session": {
                "id": 1,
                "userId": 7,
                "client": "wpsmoke",
                "expire": 1767225600,
                "key": "deadbeef",
                "publicKey": "pub1",
                "secretKey": "sec1"
            }
        }"#,
    );

    assert!(login.error.is_none());
    let session = login.session.unwrap();
    assert_eq!(session.id, Some(1));
    assert_eq!(session.user_id, Some(7));
    assert_eq!(session.client.as_deref(), Some("wpsmoke"));
    assert_eq!(session.expire, Some(1767225600));
    assert_eq!(session.key.as_deref(), Some("deadbeef"));
}

#[test]
fn api_error_decodes() {
    let login = parse_login(
        r#"{"error":{"code":401,"message":"invalid password provided"},"session":null}"#,
    );

    let err = login.error.unwrap();
    assert_eq!(err.code, 401);
    assert_eq!(err.message, "invalid password provided");
    assert!(login.session.is_none());
}
