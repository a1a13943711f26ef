//! Integration tests for the branch-relation cascade and compatibility verdicts.

use fourpillars_core::branch_relation::{evaluate, RuleKind};
use fourpillars_core::cycle::Element;
use fourpillars_core::{
    chart, judge_charts, judge_compatibility, BirthData, Branch, CompatibilityTier, Gender,
};

use Branch::*;

#[test]
fn test_three_harmony_without_double_counting() {
    let first = [Shen, Si, Zi, Wei];
    let second = [Chen, Hai, You, Yin];

    let result = judge_compatibility(&first, &second);
    assert!(result.findings[0].contains("water"));

    let eval = evaluate(&first, Some(&second));
    assert_eq!(eval.findings[0].rule, RuleKind::ThreeHarmony);
    assert_eq!(eval.findings[0].delta, 8.0);

    // 巳酉 still fires; neither water half does
    let halves: Vec<_> = eval
        .findings
        .iter()
        .filter(|f| f.rule == RuleKind::HalfCombination)
        .collect();
    assert_eq!(halves.len(), 1);
    assert!(halves[0].message.contains("metal"));
    assert!(!eval
        .findings
        .iter()
        .any(|f| f.rule == RuleKind::HalfCombination && f.message.contains(Element::Water.name())));
}

#[test]
fn test_year_clash_is_weighted_and_advised() {
    let first = [Zi, Yin, Yin, Yin];
    let second = [Wu, Yin, Yin, Yin];

    let eval = evaluate(&first, Some(&second));
    let clash = eval
        .findings
        .iter()
        .find(|f| f.rule == RuleKind::YearClash)
        .expect("year clash should fire");
    assert_eq!(clash.delta, -7.5);

    let result = judge_compatibility(&first, &second);
    // 寅午 half combination +4, clash -7.5
    assert_eq!(result.score, -3.5);
    assert_eq!(result.tier, CompatibilityTier::SomewhatDifficult);
    assert_eq!(result.recommendations.len(), 1);
    assert!(result.recommendations[0].contains("clash"));
}

#[test]
fn test_findings_follow_rule_order() {
    // three harmony, half, directional, year clash, punishment, day clash
    let first = [Zi, Shen, Wu, Mao];
    let second = [Wu, Chen, Zi, Yin];
    let eval = evaluate(&first, Some(&second));
    let rules: Vec<RuleKind> = eval.findings.iter().map(|f| f.rule).collect();
    let mut sorted = rules.clone();
    sorted.sort_by_key(|r| *r as u8);
    assert_eq!(rules, sorted);
    assert!(rules.contains(&RuleKind::Punishment));

    let result = judge_compatibility(&first, &second);
    assert!(result.description.contains("Details:"));
    // clash and punishment each attach advice
    assert_eq!(result.recommendations.len(), 2);
}

#[test]
fn test_judge_charts_matches_branch_judgement() {
    let a = chart(&BirthData::new(1982, 2, 25, 10, Gender::Male).unwrap()).unwrap();
    let b = chart(&BirthData::new(1990, 6, 15, 8, Gender::Female).unwrap()).unwrap();
    let by_chart = judge_charts(&a, &b);
    let by_branch = judge_compatibility(&a.branches(), &b.branches());
    assert_eq!(by_chart, by_branch);
    assert!((-10.0..=10.0).contains(&by_chart.score));
}
