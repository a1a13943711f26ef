//! Branch-combination scoring cascade and the two-person compatibility verdict.

use serde::{Deserialize, Serialize};

use super::matcher::{
    find_directional_triad, find_half_combinations, find_punishment, find_three_harmony,
    match_clash, match_harm, match_six_harmony, BranchMatch, BranchMultiset,
};
use super::tables::{parent_triad, THREE_HARMONIES, YEAR_BRANCH_WEIGHT};
use crate::cycle::{Branch, Chart};

/// Bounds of the aggregate compatibility score.
pub const SCORE_MIN: f64 = -10.0;
pub const SCORE_MAX: f64 = 10.0;

const CLASH_ADVICE: &str =
    "Where a clash is present, respect each other's differences and keep a comfortable distance.";
const PUNISHMENT_ADVICE: &str =
    "Where a punishment is present, avoid emotional confrontation and favour calm, reasoned dialogue.";
const POSITIVE_ADVICE: &str = "Make the most of the good match and actively cooperate with each other.";
const NEUTRAL_ADVICE: &str = "Acknowledge each other's differences and put communication first.";
const NOTHING_NOTABLE: &str =
    "No notable compatibility factors were found. This is an ordinary match.";

/// Cascade rule that produced a finding, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    ThreeHarmony,
    HalfCombination,
    DirectionalTriad,
    YearSixHarmony,
    YearClash,
    Punishment,
    YearHarm,
    DaySixHarmony,
    DayClash,
}

/// One fired rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub rule: RuleKind,
    pub matched: BranchMatch,
    /// Weighted contribution to the aggregate.
    pub delta: f64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<&'static str>,
}

/// Raw output of the cascade before classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchEvaluation {
    pub findings: Vec<Finding>,
    /// Unclamped sum of every delta.
    pub raw_score: f64,
}

impl BranchEvaluation {
    pub fn score(&self) -> f64 {
        self.raw_score.clamp(SCORE_MIN, SCORE_MAX)
    }

    fn push(&mut self, rule: RuleKind, matched: BranchMatch, weight: f64, message: String) {
        let advice = match rule {
            RuleKind::YearClash => Some(CLASH_ADVICE),
            RuleKind::Punishment => Some(PUNISHMENT_ADVICE),
            _ => None,
        };
        let delta = matched.score() * weight;
        tracing::trace!(?rule, delta, "Branch rule fired");
        self.raw_score += delta;
        self.findings.push(Finding {
            rule,
            matched,
            delta,
            message,
            advice,
        });
    }
}

/// Run the scoring cascade over one chart's branches, optionally with a partner's.
///
/// Branch arrays are ordered year, month, day, hour. Rules that compare year or
/// day branches between two people only run when `partner` is given.
pub fn evaluate(primary: &[Branch; 4], partner: Option<&[Branch; 4]>) -> BranchEvaluation {
    let combined = BranchMultiset::new(
        primary
            .iter()
            .chain(partner.into_iter().flatten())
            .copied(),
    );
    let mut eval = BranchEvaluation {
        findings: Vec::new(),
        raw_score: 0.0,
    };

    let three = find_three_harmony(&combined);
    let fired_triad = match three {
        BranchMatch::Triad { triad } => {
            eval.push(
                RuleKind::ThreeHarmony,
                three,
                1.0,
                format!(
                    "Three harmony ({}, {}) formed: a strong cooperative bond",
                    triad.name,
                    triad.element.name()
                ),
            );
            THREE_HARMONIES.iter().position(|t| std::ptr::eq(t, triad))
        }
        _ => None,
    };

    for pair in find_half_combinations(&combined) {
        if fired_triad.is_some() && parent_triad(pair) == fired_triad {
            continue;
        }
        let [a, b] = pair.branches;
        let element = pair.element.map(|e| e.name()).unwrap_or_default();
        eval.push(
            RuleKind::HalfCombination,
            BranchMatch::Pair { pair },
            1.0,
            format!("Half combination ({a}{b}, {element}): partial harmony"),
        );
    }

    let directional = find_directional_triad(&combined);
    if let BranchMatch::Triad { triad } = directional {
        eval.push(
            RuleKind::DirectionalTriad,
            directional,
            1.0,
            format!("Directional triad ({}) formed: shared direction", triad.name),
        );
    }

    let partner_pair = |i: usize| partner.map(|p| (primary[i], p[i]));
    let year = partner_pair(0);

    if let Some((a, b)) = year {
        let m = match_six_harmony(a, b);
        if m.is_match() {
            eval.push(
                RuleKind::YearSixHarmony,
                m,
                YEAR_BRANCH_WEIGHT,
                format!("Year branch six harmony ({a} and {b}): natural harmony"),
            );
        }
        let m = match_clash(a, b);
        if m.is_match() {
            eval.push(
                RuleKind::YearClash,
                m,
                YEAR_BRANCH_WEIGHT,
                format!("Year branch clash ({a} and {b}): potential for opposition and conflict"),
            );
        }
    }

    let punishment = find_punishment(&combined);
    if let BranchMatch::Punishment { punishment: p } = punishment {
        eval.push(
            RuleKind::Punishment,
            punishment,
            1.0,
            format!("Punishment ({}): internal friction", p.name()),
        );
    }

    if let Some((a, b)) = year {
        let m = match_harm(a, b);
        if m.is_match() {
            eval.push(
                RuleKind::YearHarm,
                m,
                1.0,
                format!("Harm ({a} and {b}): hidden obstacles"),
            );
        }
    }

    if let Some((a, b)) = partner_pair(2) {
        let m = match_six_harmony(a, b);
        if m.is_match() {
            eval.push(
                RuleKind::DaySixHarmony,
                m,
                1.0,
                format!("Day branch six harmony ({a} and {b}): everyday harmony"),
            );
        }
        let m = match_clash(a, b);
        if m.is_match() {
            eval.push(
                RuleKind::DayClash,
                m,
                1.0,
                format!("Day branch clash ({a} and {b}): differing daily habits"),
            );
        }
    }

    tracing::debug!(
        findings = eval.findings.len(),
        raw_score = eval.raw_score,
        "Evaluated branch relations"
    );
    eval
}

/// Five-tier classification of a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityTier {
    VeryGood,
    Good,
    Neutral,
    SomewhatDifficult,
    Difficult,
}

impl CompatibilityTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            CompatibilityTier::VeryGood
        } else if score >= 4.0 {
            CompatibilityTier::Good
        } else if score >= 0.0 {
            CompatibilityTier::Neutral
        } else if score >= -4.0 {
            CompatibilityTier::SomewhatDifficult
        } else {
            CompatibilityTier::Difficult
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompatibilityTier::VeryGood => "very good",
            CompatibilityTier::Good => "good",
            CompatibilityTier::Neutral => "neutral",
            CompatibilityTier::SomewhatDifficult => "somewhat difficult",
            CompatibilityTier::Difficult => "difficult",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            CompatibilityTier::VeryGood => {
                "The best kind of match: you support each other and grow together."
            }
            CompatibilityTier::Good => {
                "A good, cooperative match that effort can make even better."
            }
            CompatibilityTier::Neutral => {
                "An ordinary match. Both sides need to work at understanding each other."
            }
            CompatibilityTier::SomewhatDifficult => {
                "There are some challenges. Mutual understanding and compromise matter."
            }
            CompatibilityTier::Difficult => {
                "A combination with many challenges. Build the relationship carefully."
            }
        }
    }
}

/// Two-person compatibility verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    /// Aggregate clamped to [-10, 10].
    pub score: f64,
    pub raw_score: f64,
    pub tier: CompatibilityTier,
    pub description: String,
    /// Finding sentences in rule evaluation order.
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Judge two people from their branches (year, month, day, hour order).
pub fn judge_compatibility(first: &[Branch; 4], second: &[Branch; 4]) -> CompatibilityResult {
    let eval = evaluate(first, Some(second));
    let score = eval.score();
    let tier = CompatibilityTier::from_score(score);

    let findings: Vec<String> = eval.findings.iter().map(|f| f.message.clone()).collect();

    let mut recommendations: Vec<String> = eval
        .findings
        .iter()
        .filter_map(|f| f.advice.map(str::to_string))
        .collect();
    if recommendations.is_empty() {
        let default = if score >= 4.0 { POSITIVE_ADVICE } else { NEUTRAL_ADVICE };
        recommendations.push(default.to_string());
    }

    let description = if findings.is_empty() {
        format!("{}\n\n{NOTHING_NOTABLE}", tier.summary())
    } else {
        let details: Vec<String> = findings.iter().map(|f| format!("- {f}")).collect();
        format!("{}\n\nDetails:\n{}", tier.summary(), details.join("\n"))
    };

    tracing::debug!(score, tier = tier.label(), "Judged compatibility");

    CompatibilityResult {
        score,
        raw_score: eval.raw_score,
        tier,
        description,
        findings,
        recommendations,
    }
}

/// Judge two charts.
pub fn judge_charts(first: &Chart, second: &Chart) -> CompatibilityResult {
    judge_compatibility(&first.branches(), &second.branches())
}
