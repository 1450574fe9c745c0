use super::*;

#[test]
fn motion_mode_defaults_to_centered() {
    assert_eq!(MotionMode::default(), MotionMode::Centered);
}

#[test]
fn motion_mode_parses_every_name() {
    for mode in MotionMode::ALL {
        assert_eq!(mode.as_str().parse::<MotionMode>(), Ok(mode));
    }
    assert_eq!(" Momentum ".parse::<MotionMode>(), Ok(MotionMode::Momentum));
}

#[test]
fn motion_mode_rejects_unknown_names() {
    assert_eq!(
        "spin".parse::<MotionMode>(),
        Err(CatalogError::UnknownMotionMode("spin".to_owned()))
    );
}

#[test]
fn relative_modes() {
    assert!(MotionMode::Delta.is_relative());
    assert!(MotionMode::Momentum.is_relative());
    assert!(!MotionMode::Absolute.is_relative());
    assert!(!MotionMode::Centered.is_relative());
}

#[test]
fn motion_mode_serializes_lowercase() {
    let json = serde_json::to_string(&MotionMode::Delta).expect("serialize");
    assert_eq!(json, "\"delta\"");
}

#[test]
fn settings_fill_missing_fields_with_defaults() {
    let settings: StoreSettings =
        serde_json::from_str(r#"{"store_name":"Drip Works","gallery":{"mode":"delta"}}"#).expect("parse");
    assert_eq!(settings.store_name, "Drip Works");
    assert_eq!(settings.money, MoneyFormat::default());
    assert_eq!(settings.gallery.mode, MotionMode::Delta);
    assert!((settings.gallery.overflow_ratio - 0.5).abs() < f64::EPSILON);
    assert!((settings.gallery.sensitivity - 1.0).abs() < f64::EPSILON);
}

#[test]
fn default_store_name() {
    assert_eq!(StoreSettings::default().store_name, "Chaos Theory");
}
