//! Integration tests for chart derivation and the per-chart analyses built on it.

use fourpillars_core::{
    analyze_chart, chart, hundred_year_table, special_stars, BirthData, CoreError, Gender,
    LuckCycle, Stem, TenGod, TwelveStage, ValidationError,
};
use fourpillars_core::luck::AnnualNote;

fn sample() -> BirthData {
    BirthData::new(1982, 2, 25, 10, Gender::Male).unwrap()
}

#[test]
fn test_full_chart_workflow() {
    let birth = sample();
    let c = chart(&birth).unwrap();
    assert_eq!(c.to_string(), "壬戌 庚子 己巳 己巳");
    assert_eq!(c.day_master(), Stem::Ji);

    let analysis = analyze_chart(&c);
    // 己 vs 壬: earth controls water, opposite polarity
    assert_eq!(analysis.ten_gods.year, TenGod::DirectWealth);
    // 己 vs 庚: earth produces metal, opposite polarity
    assert_eq!(analysis.ten_gods.month, TenGod::HurtingOfficer);
    assert_eq!(analysis.ten_gods.hour, TenGod::Companion);
    // 子 hides 癸
    assert_eq!(analysis.month_branch_god, TenGod::IndirectWealth);
    // 己 at 巳 is 帝旺
    assert_eq!(analysis.twelve_stages.day, TwelveStage::Peak);

    let luck = LuckCycle::generate(&c, birth.gender);
    assert_eq!(luck.periods.len(), 10);

    let table = hundred_year_table(birth.year, c.day_master(), &luck);
    assert_eq!(table.len(), 100);
    let changes = table
        .iter()
        .filter(|row| row.notes.contains(&AnnualNote::LuckCycleChange))
        .count();
    assert_eq!(changes, 10);

    let stars = special_stars(&c);
    assert!(!stars.auspicious.is_empty() || !stars.inauspicious.is_empty());
}

#[test]
fn test_chart_is_idempotent() {
    let birth = sample();
    let first = chart(&birth).unwrap();
    let second = chart(&birth).unwrap();
    assert_eq!(first, second);

    let a = serde_json::to_string(&LuckCycle::generate(&first, Gender::Female)).unwrap();
    let b = serde_json::to_string(&LuckCycle::generate(&second, Gender::Female)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_chart_serializes_with_symbols() {
    let c = chart(&sample()).unwrap();
    let json = serde_json::to_value(c).unwrap();
    assert_eq!(json["year"]["stem"], "壬");
    assert_eq!(json["year"]["branch"], "戌");
}

#[test]
fn test_invalid_birth_data_is_rejected() {
    assert!(matches!(
        BirthData::new(2023, 2, 30, 10, Gender::Male),
        Err(CoreError::InvalidInput(ValidationError::InvalidDate { .. }))
    ));
    assert!(matches!(
        BirthData::new(2023, 2, 1, 24, Gender::Male),
        Err(CoreError::InvalidInput(ValidationError::HourOutOfRange(24)))
    ));
    assert!(matches!(
        "other".parse::<Gender>(),
        Err(CoreError::InvalidInput(_))
    ));
}

#[test]
fn test_stem_and_branch_lookup_by_name() {
    assert_eq!("己".parse::<Stem>().unwrap(), Stem::Ji);
    assert_eq!("Ji".parse::<Stem>().unwrap(), Stem::Ji);
    assert!(matches!("x".parse::<Stem>(), Err(CoreError::UnknownStem(_))));
    assert!(matches!(
        "x".parse::<fourpillars_core::Branch>(),
        Err(CoreError::UnknownBranch(_))
    ));
}
