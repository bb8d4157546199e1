//! Tests for the authentication module

use super::*;
use crate::error::Error;
use test_case::test_case;

fn build(creds: &Credentials) -> reqwest::Request {
    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api");
    creds.apply(req).build().unwrap()
}

#[test]
fn test_no_tokens_rejected() {
    let result = Credentials::new(None, None);
    assert!(matches!(result, Err(Error::MissingCredentials)));
}

#[test_case(Some(""), None ; "empty application token")]
#[test_case(None, Some("") ; "empty user token")]
#[test_case(Some(""), Some("") ; "both empty")]
fn test_empty_tokens_count_as_missing(app: Option<&str>, user: Option<&str>) {
    let result = Credentials::new(app.map(String::from), user.map(String::from));
    assert!(matches!(result, Err(Error::MissingCredentials)));
}

#[test_case(Some("bad\ntoken"), None ; "newline in application token")]
#[test_case(None, Some("key\r\n") ; "crlf in user token")]
#[test_case(Some("ok"), Some("nul\0") ; "nul in user token")]
fn test_tokens_must_be_header_values(app: Option<&str>, user: Option<&str>) {
    let err = Credentials::new(app.map(String::from), user.map(String::from)).unwrap_err();

    assert!(matches!(err, Error::Config { .. }));
    assert!(err.is_config());
    assert!(!err.is_transport());
    assert!(!err.to_string().contains("bad"));
}

#[test]
fn test_application_token_header() {
    let creds = Credentials::application("T1").unwrap();
    let built = build(&creds);

    assert_eq!(built.headers().get(APPLICATION_ID_HEADER).unwrap(), "T1");
    assert!(built.headers().get(API_KEY_HEADER).is_none());
}

#[test]
fn test_user_token_header() {
    let creds = Credentials::user("user-key").unwrap();
    let built = build(&creds);

    assert_eq!(built.headers().get(API_KEY_HEADER).unwrap(), "user-key");
    assert!(built.headers().get(APPLICATION_ID_HEADER).is_none());
}

#[test]
fn test_both_token_headers() {
    let creds = Credentials::new(Some("app".to_string()), Some("key".to_string())).unwrap();
    let built = build(&creds);

    assert_eq!(built.headers().get(APPLICATION_ID_HEADER).unwrap(), "app");
    assert_eq!(built.headers().get(API_KEY_HEADER).unwrap(), "key");
}

#[test]
fn test_debug_redacts_tokens() {
    let creds = Credentials::new(Some("secret-app".to_string()), Some("secret-key".to_string()))
        .unwrap();
    let debug = format!("{creds:?}");

    assert!(!debug.contains("secret-app"));
    assert!(!debug.contains("secret-key"));
    assert!(debug.contains("***"));
}
