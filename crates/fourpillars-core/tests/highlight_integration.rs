//! Integration tests for the highlight window.

use fourpillars_core::highlight::{FALLBACK_WINDOW, AGE_MAX, AGE_MIN};
use fourpillars_core::{
    chart, BeneficialElements, BirthData, Config, Element, Gender, HighlightWindowCalculator,
    LuckCycle,
};

fn setup(year: i32, month: u32, day: u32, hour: u32, gender: Gender) -> (fourpillars_core::Chart, LuckCycle) {
    let c = chart(&BirthData::new(year, month, day, hour, gender).unwrap()).unwrap();
    let luck = LuckCycle::generate(&c, gender);
    (c, luck)
}

#[test]
fn test_window_is_ordered_and_in_domain() {
    let (c, luck) = setup(1982, 2, 25, 10, Gender::Male);
    let period = HighlightWindowCalculator::new().calculate(&c, &luck);
    assert!(AGE_MIN <= period.start_age);
    assert!(period.start_age <= period.peak_age);
    assert!(period.peak_age <= period.end_age);
    assert!(period.end_age <= AGE_MAX);
    if !period.fallback {
        assert!(period.score >= period.threshold);
    }
    assert!(period.luck_periods.iter().all(|p| p.start_age <= period.end_age));
}

#[test]
fn test_known_windows() {
    let cases = [
        ((1982, 2, 25, 10, Gender::Male), (35, 54, 43, 43.4545)),
        ((1990, 6, 15, 8, Gender::Female), (34, 53, 38, 41.8182)),
        ((1975, 11, 3, 23, Gender::Male), (34, 53, 43, 40.5455)),
    ];
    for ((y, m, d, h, g), (start, end, peak, score)) in cases {
        let (c, luck) = setup(y, m, d, h, g);
        let period = HighlightWindowCalculator::new().calculate(&c, &luck);
        assert!(!period.fallback, "{y}-{m}-{d}");
        assert_eq!((period.start_age, period.end_age, period.peak_age), (start, end, peak), "{y}-{m}-{d}");
        assert!((period.score - score).abs() < 1e-3, "{y}-{m}-{d}: {}", period.score);
    }
}

#[test]
fn test_peak_is_first_maximum() {
    let (c, luck) = setup(1990, 6, 15, 8, Gender::Female);
    let calc = HighlightWindowCalculator::new();
    let scores = calc.scores(&c, &luck);
    let best = scores.iter().map(|s| s.smoothed).fold(f64::NEG_INFINITY, f64::max);
    let first = scores.iter().find(|s| s.smoothed == best).unwrap();
    let period = calc.calculate(&c, &luck);
    if !period.fallback {
        assert_eq!(period.peak_age, first.age);
    }
}

#[test]
fn test_fallback_when_threshold_unreachable() {
    let (c, luck) = setup(1990, 6, 15, 8, Gender::Female);
    let period = HighlightWindowCalculator::new()
        .with_threshold_margin(500.0)
        .calculate(&c, &luck);
    assert!(period.fallback);
    assert_eq!((period.start_age, period.end_age), FALLBACK_WINDOW);
    assert!(period.start_age <= period.peak_age && period.peak_age <= period.end_age);
}

#[test]
fn test_beneficial_elements_raise_scores() {
    let (c, luck) = setup(1982, 2, 25, 10, Gender::Male);
    let plain = HighlightWindowCalculator::new().scores(&c, &luck);
    let boosted = HighlightWindowCalculator::new()
        .with_beneficial(BeneficialElements {
            elements: Element::ALL.to_vec(),
            ..Default::default()
        })
        .scores(&c, &luck);
    for (p, b) in plain.iter().zip(&boosted) {
        assert!((b.raw - p.raw - 15.0).abs() < 1e-9);
    }
}

#[test]
fn test_config_drives_calculator() {
    let (c, luck) = setup(1982, 2, 25, 10, Gender::Male);
    let mut cfg = Config::default();
    cfg.set("highlight.threshold_margin", "500").unwrap();
    let period = cfg.highlight_calculator().calculate(&c, &luck);
    assert!(period.fallback);
}
