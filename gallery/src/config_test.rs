#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_is_valid() {
    let config = GalleryConfig::default().validate().expect("defaults validate");
    assert_eq!(config.mapping_mode, MappingMode::Centered);
    assert_eq!(config.spring, SpringConfig::GALLERY);
    assert_eq!(config.layout.len(), 12);
}

#[test]
fn shipped_springs() {
    assert_eq!(SpringConfig::GALLERY.stiffness, 150.0);
    assert_eq!(SpringConfig::GALLERY.damping, 25.0);
    assert_eq!(SpringConfig::CURSOR.stiffness, 200.0);
    assert_eq!(SpringConfig::CURSOR.damping, 25.0);
    assert!(SpringConfig::GALLERY.damping_ratio() >= 1.0);
}

#[test]
fn canvas_percent_tracks_overflow() {
    let config = GalleryConfig { overflow_x: 0.5, overflow_y: 1.0, ..GalleryConfig::default() };
    assert_eq!(config.canvas_percent(), Point::new(150.0, 200.0));
    assert_eq!(config.overflow(), Point::new(0.5, 1.0));
}

#[test]
fn overflow_bounds_are_inclusive() {
    for ratio in [0.5, 3.0] {
        let config = GalleryConfig { overflow_x: ratio, overflow_y: ratio, ..GalleryConfig::default() };
        assert!(config.validate().is_ok());
    }
}

#[test]
fn overflow_outside_range_is_rejected() {
    let config = GalleryConfig { overflow_y: 3.5, ..GalleryConfig::default() };
    assert_eq!(
        config.validate(),
        Err(ConfigError::OverflowOutOfRange { axis: 'y', value: 3.5 })
    );
}

#[test]
fn decay_must_be_a_fraction() {
    for decay in [0.0, 1.0, 1.2] {
        let config = GalleryConfig { decay_factor: decay, ..GalleryConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::DecayOutOfRange(decay)));
    }
}

#[test]
fn sensitivity_must_be_positive() {
    let config = GalleryConfig { sensitivity: 0.0, ..GalleryConfig::default() };
    assert_eq!(
        config.validate(),
        Err(ConfigError::NotPositive { field: "sensitivity", value: 0.0 })
    );
}

#[test]
fn spring_fields_are_validated() {
    let spring = SpringConfig { mass: -1.0, ..SpringConfig::GALLERY };
    let config = GalleryConfig { spring, ..GalleryConfig::default() };
    assert_eq!(
        config.validate(),
        Err(ConfigError::NotPositive { field: "mass", value: -1.0 })
    );
}

#[test]
fn from_tuning_applies_operator_values() {
    let tuning = GalleryTuning { mode: MappingMode::Momentum, overflow_ratio: 1.0, sensitivity: 1.5 };
    let config = GalleryConfig::from_tuning(&tuning).expect("valid tuning");
    assert_eq!(config.mapping_mode, MappingMode::Momentum);
    assert_eq!(config.overflow(), Point::new(1.0, 1.0));
    assert_eq!(config.sensitivity, 1.5);
    assert_eq!(config.decay_factor, 0.92);
}

#[test]
fn from_tuning_rejects_bad_overflow() {
    let tuning = GalleryTuning { overflow_ratio: 0.1, ..GalleryTuning::default() };
    assert!(matches!(
        GalleryConfig::from_tuning(&tuning),
        Err(ConfigError::OverflowOutOfRange { axis: 'x', .. })
    ));
}
