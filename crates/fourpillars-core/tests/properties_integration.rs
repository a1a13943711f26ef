//! Property tests for the cycle arithmetic and scoring invariants.

use chrono::{Duration, NaiveDate};
use fourpillars_core::branch_relation::evaluate;
use fourpillars_core::cycle::{day_pillar_for_date, year_pillar};
use fourpillars_core::{
    chart, judge_compatibility, BirthData, Branch, Gender, HighlightWindowCalculator, LuckCycle,
};
use proptest::prelude::*;

fn branch() -> impl Strategy<Value = Branch> {
    (0usize..12).prop_map(|i| Branch::ALL[i])
}

fn branches() -> impl Strategy<Value = [Branch; 4]> {
    proptest::array::uniform4(branch())
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn birth() -> impl Strategy<Value = BirthData> {
    (1900i32..2100, 1u32..=12, 1u32..=28, 0u32..24, gender())
        .prop_map(|(y, m, d, h, g)| BirthData { year: y, month: m, day: d, hour: h, gender: g })
}

proptest! {
    #[test]
    fn year_pillar_follows_anchor(year in -3000i32..5000) {
        let p = year_pillar(year);
        let diff = i64::from(year) - 1984;
        prop_assert_eq!(p.stem.index() as i64, diff.rem_euclid(10));
        prop_assert_eq!(p.branch.index() as i64, diff.rem_euclid(12));
    }

    #[test]
    fn day_pillar_repeats_every_sixty_days(offset in -80_000i64..80_000) {
        let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let d1 = epoch + Duration::days(offset);
        let d2 = d1 + Duration::days(60);
        prop_assert_eq!(day_pillar_for_date(d1), day_pillar_for_date(d2));
    }

    #[test]
    fn luck_cycle_has_ten_entries(b in birth()) {
        let c = chart(&b).unwrap();
        let luck = LuckCycle::generate(&c, b.gender);
        prop_assert_eq!(luck.periods.len(), 10);
        for (i, p) in luck.periods.iter().enumerate() {
            prop_assert!(p.pillar.stem.index() < 10);
            prop_assert!(p.pillar.branch.index() < 12);
            prop_assert_eq!(p.start_age, luck.start_age + 10 * i as u32);
        }
    }

    #[test]
    fn compatibility_score_is_clamped(a in branches(), b in branches()) {
        let result = judge_compatibility(&a, &b);
        prop_assert!((-10.0..=10.0).contains(&result.score));
        prop_assert!(!result.recommendations.is_empty());
        prop_assert_eq!(result.clone(), judge_compatibility(&a, &b));
    }

    #[test]
    fn single_chart_score_is_clamped(a in branches()) {
        let score = evaluate(&a, None).score();
        prop_assert!((-10.0..=10.0).contains(&score));
    }

    #[test]
    fn highlight_window_contains_peak(b in birth(), margin in 0.0f64..50.0) {
        let c = chart(&b).unwrap();
        let luck = LuckCycle::generate(&c, b.gender);
        let period = HighlightWindowCalculator::new()
            .with_threshold_margin(margin)
            .calculate(&c, &luck);
        prop_assert!(period.start_age <= period.peak_age);
        prop_assert!(period.peak_age <= period.end_age);
        if period.fallback {
            prop_assert_eq!((period.start_age, period.end_age), (34, 55));
        }
    }
}
