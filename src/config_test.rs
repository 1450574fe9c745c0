use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key| map.get(key).cloned()
}

const REQUIRED: [(&str, &str); 3] = [
    ("STORE_ID", "store-1"),
    ("BACKEND_URL", "https://backend.test/"),
    ("BACKEND_API_KEY", "anon-key"),
];

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&REQUIRED)).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.store_id, "store-1");
    assert_eq!(cfg.backend_url, "https://backend.test");
    assert_eq!(cfg.backend_api_key, "anon-key");
    assert_eq!(cfg.backend_timeout_secs, DEFAULT_BACKEND_TIMEOUT_SECS);
    assert_eq!(cfg.settings, StoreSettings { store_id: "store-1".into(), ..StoreSettings::default() });
}

#[test]
fn from_lookup_parses_overrides() {
    let mut pairs = REQUIRED.to_vec();
    pairs.extend([
        ("PORT", "8080"),
        ("BACKEND_TIMEOUT_SECS", "3"),
        ("STORE_NAME", "Drip Works"),
        ("STORE_CURRENCY", "mxn"),
        ("GALLERY_MAPPING_MODE", "Momentum"),
        ("GALLERY_OVERFLOW_RATIO", "1.5"),
        ("GALLERY_SENSITIVITY", "0.8"),
    ]);
    let cfg = ServerConfig::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_timeout_secs, 3);
    assert_eq!(cfg.settings.store_name, "Drip Works");
    assert_eq!(cfg.settings.money.currency, "MXN");
    assert_eq!(cfg.settings.gallery.mode, MotionMode::Momentum);
    assert!((cfg.settings.gallery.overflow_ratio - 1.5).abs() < f64::EPSILON);
    assert!((cfg.settings.gallery.sensitivity - 0.8).abs() < f64::EPSILON);
}

#[test]
fn from_lookup_requires_store_and_backend() {
    for missing in ["STORE_ID", "BACKEND_URL", "BACKEND_API_KEY"] {
        let pairs = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != missing)
            .collect::<Vec<_>>();
        assert_eq!(ServerConfig::from_lookup(lookup(&pairs)), Err(ConfigError::Missing(missing)));
    }
}

#[test]
fn blank_required_value_counts_as_missing() {
    let mut pairs = REQUIRED.to_vec();
    pairs[0] = ("STORE_ID", "   ");
    assert_eq!(ServerConfig::from_lookup(lookup(&pairs)), Err(ConfigError::Missing("STORE_ID")));
}

#[test]
fn backend_url_must_be_http() {
    let mut pairs = REQUIRED.to_vec();
    pairs[1] = ("BACKEND_URL", "backend.test");
    assert!(matches!(
        ServerConfig::from_lookup(lookup(&pairs)),
        Err(ConfigError::Invalid { var: "BACKEND_URL", .. })
    ));
}

#[test]
fn invalid_values_name_their_variable() {
    for (var, value) in [
        ("PORT", "eighty"),
        ("BACKEND_TIMEOUT_SECS", "-1"),
        ("STORE_CURRENCY", "dollars"),
        ("GALLERY_MAPPING_MODE", "spin"),
        ("GALLERY_OVERFLOW_RATIO", "wide"),
    ] {
        let mut pairs = REQUIRED.to_vec();
        pairs.push((var, value));
        match ServerConfig::from_lookup(lookup(&pairs)) {
            Err(ConfigError::Invalid { var: got, .. }) => assert_eq!(got, var),
            other => panic!("expected invalid {var}, got {other:?}"),
        }
    }
}
