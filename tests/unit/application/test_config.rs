use base44_client::application::config::{Config, RestApiConfig};
use base44_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use std::env;
use std::time::Duration;

#[test]
fn config_with_credentials_uses_defaults() {
    let config = Config::with_credentials("key", "app");

    assert_eq!(config.credentials.api_key, "key");
    assert_eq!(config.credentials.app_id, "app");
    assert_eq!(config.rest_api, RestApiConfig::default());
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
}

#[test]
fn config_builders_trim_trailing_slash() {
    let config = Config::with_credentials("key", "app")
        .with_base_url("http://localhost:8080/api/")
        .with_timeout(3);

    assert_eq!(config.rest_api.base_url, "http://localhost:8080/api");
    assert_eq!(config.rest_api.timeout, 3);
}

#[test]
fn config_new_reads_environment() {
    unsafe {
        env::set_var("BASE44_API_KEY", "env_key");
        env::set_var("BASE44_APP_ID", "env_app");
        env::set_var("BASE44_REST_BASE_URL", "https://staging.example.com/api/");
        env::set_var("BASE44_REST_TIMEOUT", "12");
    }

    let config = Config::new();

    unsafe {
        env::remove_var("BASE44_API_KEY");
        env::remove_var("BASE44_APP_ID");
        env::remove_var("BASE44_REST_BASE_URL");
        env::remove_var("BASE44_REST_TIMEOUT");
    }

    assert_eq!(config.credentials.api_key, "env_key");
    assert_eq!(config.credentials.app_id, "env_app");
    assert_eq!(config.rest_api.base_url, "https://staging.example.com/api");
    assert_eq!(config.rest_api.timeout, 12);
}

#[test]
fn config_serializes() {
    let config = Config::with_credentials("key", "app");
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["credentials"]["app_id"], "app");
    assert_eq!(value["rest_api"]["timeout"], 30);
}

#[test]
fn config_debug_and_display_hide_api_key() {
    let config = Config::with_credentials("super-secret-key", "app");

    let debug = format!("{config:?}");
    let display = config.to_string();
    let credentials = format!("{:?} {}", config.credentials, config.credentials);

    for text in [&debug, &display, &credentials] {
        assert!(!text.contains("super-secret-key"), "key leaked in {text}");
        assert!(text.contains("***"));
        assert!(text.contains("app"));
    }
    assert!(display.contains("https://app.base44.com/api"));
}
