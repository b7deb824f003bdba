use pagegate_domain::config::{AdmissionConfig, Config, GuardConfig};

#[test]
fn test_guard_config_default_values() {
    let config = GuardConfig::default();

    assert_eq!(config.resolver_timeout_ms, 3000);
    assert_eq!(config.cache_ttl_secs, 300);
    assert_eq!(config.cache_max_entries, 1000);
    assert_eq!(config.fetch_timeout_ms, 30_000);
    assert_eq!(config.fetch_timeout_max_ms, 120_000);
    assert_eq!(config.max_redirects, 5);
}

#[test]
fn test_admission_config_default_values() {
    let config = AdmissionConfig::default();

    assert_eq!(config.max_requests, 5);
    assert_eq!(config.window_ms, 60_000);
    assert_eq!(config.max_identities, 10_000);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let toml_str = r#"
        [admission]
        max_requests = 10

        [guard]
        resolver_timeout_ms = 1500
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.admission.max_requests, 10);
    assert_eq!(config.admission.window_ms, 60_000);
    assert_eq!(config.guard.resolver_timeout_ms, 1500);
    assert_eq!(config.guard.cache_max_entries, 1000);
}

#[test]
fn test_validate_rejects_zero_window() {
    let mut config = Config::default();
    config.admission.window_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_timeout_above_maximum() {
    let mut config = Config::default();
    config.guard.fetch_timeout_ms = 500_000;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(Config::default().validate().is_ok());
}
