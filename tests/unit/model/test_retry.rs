use reqwest::StatusCode;
use ubidots_client::model::retry::RetryConfig;

#[test]
fn test_retry_config_with_max_attempts() {
    let config = RetryConfig::with_max_attempts(5);
    assert_eq!(config.max_attempts(), 5);
    assert_eq!(config.auth_failure_codes, vec![401, 403]);
}

#[test]
fn test_retry_config_zero_attempts_means_one() {
    let config = RetryConfig::with_max_attempts(0);
    assert_eq!(config.max_attempts(), 1);
}

#[test]
fn test_retry_config_unset_attempts_defaults_to_two() {
    let config = RetryConfig {
        max_attempt_count: None,
        auth_failure_codes: vec![401],
    };
    assert_eq!(config.max_attempts(), 2);
}

#[test]
fn test_retry_config_is_auth_failure() {
    let config = RetryConfig::with_codes_and_max_attempts(&[401, 419], 3);
    assert!(config.is_auth_failure(StatusCode::UNAUTHORIZED));
    assert!(config.is_auth_failure(StatusCode::from_u16(419).unwrap()));
    assert!(!config.is_auth_failure(StatusCode::FORBIDDEN));
    assert!(!config.is_auth_failure(StatusCode::OK));
}

#[test]
fn test_retry_config_default() {
    let config = RetryConfig::default();
    assert!(config.max_attempts() >= 1);
    assert!(!config.auth_failure_codes.is_empty());
}

#[test]
fn test_retry_config_serialization() {
    let config = RetryConfig::with_max_attempts(3);
    let json = serde_json::to_value(&config).unwrap();
    let back: RetryConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back, config);
}
