//! Life-highlight window.
//!
//! Every age in the domain gets a raw score (structural age bonus plus the
//! quality of the luck period covering that age). Raw scores are smoothed with
//! an 11-wide moving average, and the window is the span of ages whose smoothed
//! score clears the mean by a margin.

use serde::{Deserialize, Serialize};

use crate::cycle::{Branch, Chart, Element, Pillar, Stem};
use crate::luck::{LuckCycle, LuckPeriod};
use crate::relation::twelve_stage;

/// First age scored.
pub const AGE_MIN: u32 = 20;
/// Last age scored.
pub const AGE_MAX: u32 = 70;
/// Half-width of the smoothing window.
pub const SMOOTHING_RADIUS: u32 = 5;

/// Ages receiving the core structural bonus.
pub const CORE_AGES: (u32, u32) = (33, 48);
pub const CORE_BONUS: f64 = 40.0;
/// Ages receiving the prime bonus when not already in the core range.
pub const PRIME_AGES: (u32, u32) = (34, 55);
pub const PRIME_BONUS: f64 = 30.0;

/// Window used when no age clears the threshold.
pub const FALLBACK_WINDOW: (u32, u32) = (34, 55);

pub const DEFAULT_THRESHOLD_MARGIN: f64 = 5.0;
pub const DEFAULT_BENEFICIAL_BONUS: f64 = 15.0;

fn within(age: u32, (lo, hi): (u32, u32)) -> bool {
    (lo..=hi).contains(&age)
}

/// Externally supplied favourable stems, branches and elements.
///
/// Empty by default; nothing in this crate derives it from a chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficialElements {
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub stems: Vec<Stem>,
    #[serde(default)]
    pub branches: Vec<Branch>,
}

impl BeneficialElements {
    /// A pillar matches when its stem or branch is listed, or when the element
    /// of its stem or of its branch's hidden stem is listed.
    pub fn matches(&self, pillar: &Pillar) -> bool {
        self.stems.contains(&pillar.stem)
            || self.branches.contains(&pillar.branch)
            || self.elements.contains(&pillar.stem.element())
            || self.elements.contains(&pillar.branch.hidden_stem().element())
    }
}

/// Raw and smoothed score of one age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeScore {
    pub age: u32,
    pub raw: f64,
    pub smoothed: f64,
}

/// The computed highlight window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightPeriod {
    pub start_age: u32,
    pub end_age: u32,
    pub peak_age: u32,
    /// Smoothed score at the peak.
    pub score: f64,
    pub threshold: f64,
    /// True when no age cleared the threshold.
    pub fallback: bool,
    pub reason: String,
    /// Luck periods starting at or before `end_age`.
    pub luck_periods: Vec<LuckPeriod>,
}

impl HighlightPeriod {
    /// Human-readable interpretation of the window.
    pub fn explain(&self) -> String {
        let prep_start = self.start_age.saturating_sub(10);
        let prep_end = self.start_age.saturating_sub(1);
        indoc::formatdoc! {"
            Life highlight period
            According to your chart, the highlight of your life runs from age {start} to {end}.
            Fortune peaks around age {peak}.

            Reason
            {reason}

            What this period brings
            Past effort bears fruit and you are at your most active socially.
            Career, family and relationships can all feel fulfilling.

            Keep in mind
            A highlight period does not bring success without effort.
            Read it as the time when effort is most likely to be rewarded,
            and act to seize the chances it offers.

            Preparation ({prep_start}-{prep_end})
            Build skills and relationships in readiness for the highlight period.

            Stability (from {after})
            Use the foundation built during the highlight period for a settled life.",
            start = self.start_age,
            end = self.end_age,
            peak = self.peak_age,
            reason = self.reason,
            after = self.end_age + 1,
        }
    }
}

/// Scores ages and extracts the highlight window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightWindowCalculator {
    pub beneficial: BeneficialElements,
    pub beneficial_bonus: f64,
    pub threshold_margin: f64,
}

impl Default for HighlightWindowCalculator {
    fn default() -> Self {
        Self {
            beneficial: BeneficialElements::default(),
            beneficial_bonus: DEFAULT_BENEFICIAL_BONUS,
            threshold_margin: DEFAULT_THRESHOLD_MARGIN,
        }
    }
}

impl HighlightWindowCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_beneficial(mut self, beneficial: BeneficialElements) -> Self {
        self.beneficial = beneficial;
        self
    }

    pub fn with_beneficial_bonus(mut self, bonus: f64) -> Self {
        self.beneficial_bonus = bonus;
        self
    }

    pub fn with_threshold_margin(mut self, margin: f64) -> Self {
        self.threshold_margin = margin;
        self
    }

    /// Age-only bonus. The core range takes precedence; the two bonuses never add.
    pub fn structural_bonus(age: u32) -> f64 {
        if within(age, CORE_AGES) {
            CORE_BONUS
        } else if within(age, PRIME_AGES) {
            PRIME_BONUS
        } else {
            0.0
        }
    }

    /// Quality of the luck period covering `age`; zero when none covers it.
    pub fn luck_quality(&self, day_master: Stem, luck: &LuckCycle, age: u32) -> f64 {
        let Some(period) = luck.period_for_age(age) else {
            return 0.0;
        };
        let bonus = if self.beneficial.matches(&period.pillar) {
            self.beneficial_bonus
        } else {
            0.0
        };
        bonus + f64::from(twelve_stage(day_master, period.pillar.branch).score())
    }

    /// Raw and smoothed scores for every age in the domain.
    pub fn scores(&self, chart: &Chart, luck: &LuckCycle) -> Vec<AgeScore> {
        let day_master = chart.day_master();
        let raw: Vec<f64> = (AGE_MIN..=AGE_MAX)
            .map(|age| Self::structural_bonus(age) + self.luck_quality(day_master, luck, age))
            .collect();

        let width = (2 * SMOOTHING_RADIUS + 1) as f64;
        (AGE_MIN..=AGE_MAX)
            .map(|age| {
                // out-of-domain neighbours count as zero
                let lo = age.saturating_sub(SMOOTHING_RADIUS).max(AGE_MIN);
                let hi = (age + SMOOTHING_RADIUS).min(AGE_MAX);
                let sum: f64 = (lo..=hi).map(|a| raw[(a - AGE_MIN) as usize]).sum();
                AgeScore {
                    age,
                    raw: raw[(age - AGE_MIN) as usize],
                    smoothed: sum / width,
                }
            })
            .collect()
    }

    pub fn calculate(&self, chart: &Chart, luck: &LuckCycle) -> HighlightPeriod {
        let scores = self.scores(chart, luck);

        let mean = scores.iter().map(|s| s.smoothed).sum::<f64>() / scores.len() as f64;
        let threshold = mean + self.threshold_margin;

        let above: Vec<u32> = scores
            .iter()
            .filter(|s| s.smoothed >= threshold)
            .map(|s| s.age)
            .collect();

        let peak = first_argmax(scores.iter());

        let (start_age, end_age, peak, fallback) = match (above.first(), above.last()) {
            (Some(&start), Some(&end)) => (start, end, peak, false),
            _ => {
                let (start, end) = FALLBACK_WINDOW;
                let peak = if within(peak.age, FALLBACK_WINDOW) {
                    peak
                } else {
                    first_argmax(scores.iter().filter(|s| within(s.age, FALLBACK_WINDOW)))
                };
                tracing::debug!(threshold, "No age cleared the highlight threshold, using fallback");
                (start, end, peak, true)
            }
        };

        let reason = self.reason(start_age, end_age, peak.age, luck);
        let luck_periods = luck
            .periods
            .iter()
            .filter(|p| p.start_age <= end_age)
            .copied()
            .collect();

        tracing::debug!(start_age, end_age, peak_age = peak.age, threshold, "Computed highlight window");

        HighlightPeriod {
            start_age,
            end_age,
            peak_age: peak.age,
            score: peak.smoothed,
            threshold,
            fallback,
            reason,
            luck_periods,
        }
    }

    fn reason(&self, start: u32, end: u32, peak: u32, luck: &LuckCycle) -> String {
        let mut parts = Vec::new();
        if start <= CORE_AGES.1 && end >= CORE_AGES.0 {
            parts.push(format!(
                "Overlaps the day pillar's age range ({}-{}), the core period of life",
                CORE_AGES.0, CORE_AGES.1
            ));
        }
        if let Some(period) = luck.period_for_age(peak) {
            parts.push(format!(
                "Fortune is strongest during luck period {} ({})",
                period.index + 1,
                period.pillar
            ));
        }
        parts.join("; ")
    }
}

/// First maximum by smoothed score in iteration order.
fn first_argmax<'a>(scores: impl Iterator<Item = &'a AgeScore>) -> AgeScore {
    let mut best = AgeScore {
        age: AGE_MIN,
        raw: 0.0,
        smoothed: f64::NEG_INFINITY,
    };
    for s in scores {
        if s.smoothed > best.smoothed {
            best = *s;
        }
    }
    best
}
