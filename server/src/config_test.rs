use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 5000);
    assert!(cfg.auth_upstream_url.is_none());
    assert_eq!(cfg.auth_timeout, Duration::from_secs(DEFAULT_AUTH_TIMEOUT_SECS));
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("AUTH_UPSTREAM_URL", "https://auth.example.test/api/"),
        ("AUTH_TIMEOUT_SECS", "3"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.auth_upstream_url.as_deref(), Some("https://auth.example.test/api"));
    assert_eq!(cfg.auth_timeout, Duration::from_secs(3));
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("not-a-port".into()));

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn blank_upstream_means_unconfigured() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_UPSTREAM_URL", "   ")])).unwrap();
    assert!(cfg.auth_upstream_url.is_none());
}

#[test]
fn non_http_upstream_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("AUTH_UPSTREAM_URL", "ftp://auth.test")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidUpstream("ftp://auth.test".into()));
}

#[test]
fn bad_or_zero_timeout_falls_back_to_default() {
    for raw in ["abc", "0", "-5"] {
        let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_TIMEOUT_SECS", raw)])).unwrap();
        assert_eq!(cfg.auth_timeout, Duration::from_secs(DEFAULT_AUTH_TIMEOUT_SECS), "raw={raw:?}");
    }
}

