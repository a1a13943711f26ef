//! Integration tests for the energy-dip profile and status evaluation.

use chrono::NaiveDate;
use fourpillars_core::energy::profile;
use fourpillars_core::{current_status, status_at, CoreError, EnergyLevel, Stem};

#[test]
fn test_ji_in_june_afternoon_is_normal() {
    let status = current_status(Stem::Ji, 6, 13).unwrap();
    assert!(!status.in_strong_month);
    assert!(!status.in_weak_month);
    assert!(!status.in_strong_hour);
    assert_eq!(status.energy_level, EnergyLevel::Normal);
}

#[test]
fn test_status_serializes_level_in_snake_case() {
    let status = current_status(Stem::Ji, 1, 4).unwrap();
    let json = serde_json::to_value(status).unwrap();
    assert_eq!(json["energy_level"], "very_low");
    assert_eq!(json["stem"], "己");

    let json = serde_json::to_value(current_status(Stem::Ji, 11, 12).unwrap()).unwrap();
    assert_eq!(json["energy_level"], "slightly_low");
}

#[test]
fn test_every_stem_has_a_profile_with_valid_ranges() {
    for stem in Stem::ALL {
        let p = profile(stem).unwrap();
        assert!(!p.strong_months.is_empty());
        assert!(p.strong_months.iter().chain(p.weak_months).all(|m| (1..=12).contains(m)));
        assert!(p.strong_hours.iter().all(|h| h.start < 24 && h.end < 24));
        // strong and weak months never overlap
        assert!(p.strong_months.iter().all(|m| !p.weak_months.contains(m)));
    }
}

#[test]
fn test_status_at_matches_current_status() {
    let at = NaiveDate::from_ymd_opt(2025, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 15, 0))
        .unwrap();
    assert_eq!(status_at(Stem::Geng, at).unwrap(), current_status(Stem::Geng, 12, 23).unwrap());
    assert_eq!(status_at(Stem::Geng, at).unwrap().energy_level, EnergyLevel::VeryLow);
}

#[test]
fn test_out_of_range_inputs_are_errors() {
    assert!(matches!(current_status(Stem::Ji, 0, 10), Err(CoreError::InvalidInput(_))));
    assert!(matches!(current_status(Stem::Ji, 5, 30), Err(CoreError::InvalidInput(_))));
}
