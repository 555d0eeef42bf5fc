use std::time::Duration;
use velo_infer::{ClientConfig, InferError};

#[test]
fn test_defaults() {
    let config = ClientConfig::new("k");
    assert_eq!(config.model(), "gemini-2.5-flash");
    assert_eq!(
        config.base_url(),
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
}

#[test]
fn test_builder_setters() {
    let config = ClientConfig::new("k")
        .with_model("gemini-2.0-flash")
        .with_base_url("http://localhost:9090/v1beta")
        .with_request_timeout(Duration::from_secs(5));

    assert_eq!(config.api_key(), "k");
    assert_eq!(config.model(), "gemini-2.0-flash");
    assert_eq!(config.base_url(), "http://localhost:9090/v1beta");
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
}

#[test]
fn test_debug_redacts_key() {
    let config = ClientConfig::new("super-secret");
    let text = format!("{config:?}");
    assert!(!text.contains("super-secret"));
}

// Env mutation is process-global, so the from_env cases run as one test.
#[test]
fn test_from_env_precedence() {
    unsafe {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("API_KEY");
    }
    assert!(matches!(
        ClientConfig::from_env(),
        Err(InferError::Config(_))
    ));

    unsafe { std::env::set_var("API_KEY", "fallback") };
    assert_eq!(ClientConfig::from_env().unwrap().api_key(), "fallback");

    unsafe { std::env::set_var("GEMINI_API_KEY", "primary") };
    assert_eq!(ClientConfig::from_env().unwrap().api_key(), "primary");

    unsafe {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("API_KEY");
    }
}
