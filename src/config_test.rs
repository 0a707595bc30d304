use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config, HostConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_bind_addr() {
    let config = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("VIDAPLUS_BIND_ADDR", "127.0.0.1"),
    ]))
    .expect("config");
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("VIDAPLUS_BIND_ADDR", "")]))
        .expect("config");
    assert_eq!(config, HostConfig::default());
}

#[test]
fn rejects_invalid_port() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).expect_err("invalid");
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
    assert_eq!(err.to_string(), "invalid PORT: http");
}

#[test]
fn rejects_invalid_bind_addr() {
    let err = HostConfig::from_lookup(lookup(&[("VIDAPLUS_BIND_ADDR", "localhost")]))
        .expect_err("invalid");
    assert!(matches!(err, ConfigError::InvalidBindAddr(_)));
}
