//! Energy-dip table and point-in-time status.
//!
//! Each day stem has months and double-hours in which its element is at its
//! weakest. The table is static; the status evaluator only reads it.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::cycle::{Branch, Stem};
use crate::error::{CoreError, Result, ValidationError};

/// A two-hour range. `start > end` wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    /// First hour inside the range (0-23)
    pub start: u32,
    /// First hour after the range (0-23)
    pub end: u32,
}

impl HourRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u32) -> bool {
        if self.start > self.end {
            hour >= self.start || hour < self.end
        } else {
            self.start <= hour && hour < self.end
        }
    }

    /// Double-hour branch whose span starts at `start`.
    pub fn branch(&self) -> Branch {
        Branch::from_index(((self.start as i64) + 1) / 2)
    }
}

/// Months and hours in which one day stem's energy dips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyDipProfile {
    pub stem: Stem,
    /// Calendar months of strong dip (1-12)
    pub strong_months: &'static [u32],
    /// Calendar months of mild dip (1-12)
    pub weak_months: &'static [u32],
    pub strong_hours: &'static [HourRange],
    pub rationale: &'static str,
}

const WOOD_HOURS: [HourRange; 3] = [HourRange::new(11, 13), HourRange::new(13, 15), HourRange::new(15, 17)];
const FIRE_HOURS: [HourRange; 3] = [HourRange::new(17, 19), HourRange::new(19, 21), HourRange::new(21, 23)];
const WATER_HOURS: [HourRange; 3] = [HourRange::new(7, 9), HourRange::new(9, 11), HourRange::new(11, 13)];

const WOOD_RATIONALE: &str =
    "Autumn, when metal controls wood; wood passes through death, tomb and extinction in the twelve stages.";
const FIRE_RATIONALE: &str =
    "Winter, when water controls fire; fire passes through death, tomb and extinction in the twelve stages.";
const METAL_RATIONALE: &str =
    "Summer, when fire controls metal; metal passes through death, tomb and extinction in the twelve stages.";
const WATER_RATIONALE: &str =
    "The seasonal turning points, when earth controls water; water passes through death, tomb and extinction in the twelve stages.";

static ENERGY_DIP_TABLE: [EnergyDipProfile; 10] = [
    EnergyDipProfile {
        stem: Stem::Jia,
        strong_months: &[6, 7, 8],
        weak_months: &[4, 5],
        strong_hours: &WOOD_HOURS,
        rationale: WOOD_RATIONALE,
    },
    EnergyDipProfile {
        stem: Stem::Yi,
        strong_months: &[6, 7, 8],
        weak_months: &[4, 5],
        strong_hours: &WOOD_HOURS,
        rationale: WOOD_RATIONALE,
    },
    EnergyDipProfile {
        stem: Stem::Bing,
        strong_months: &[9, 10, 11],
        weak_months: &[7, 8],
        strong_hours: &FIRE_HOURS,
        rationale: FIRE_RATIONALE,
    },
    EnergyDipProfile {
        stem: Stem::Ding,
        strong_months: &[9, 10, 11],
        weak_months: &[7, 8],
        strong_hours: &FIRE_HOURS,
        rationale: FIRE_RATIONALE,
    },
    EnergyDipProfile {
        stem: Stem::Wu,
        strong_months: &[9, 10, 11],
        weak_months: &[7, 8],
        strong_hours: &FIRE_HOURS,
        rationale: "Earth follows fire; it weakens in spring when wood controls it, or as fire declines.",
    },
    EnergyDipProfile {
        stem: Stem::Ji,
        strong_months: &[1, 2, 3],
        weak_months: &[11, 12],
        strong_hours: &[HourRange::new(3, 5), HourRange::new(5, 7), HourRange::new(7, 9)],
        rationale: "Spring, when wood controls earth; earth passes through death, tomb and extinction in the twelve stages.",
    },
    EnergyDipProfile {
        stem: Stem::Geng,
        strong_months: &[12, 1, 2],
        weak_months: &[10, 11],
        strong_hours: &[HourRange::new(23, 1), HourRange::new(1, 3), HourRange::new(3, 5)],
        rationale: METAL_RATIONALE,
    },
    EnergyDipProfile {
        stem: Stem::Xin,
        strong_months: &[4, 5, 6],
        weak_months: &[3, 7],
        strong_hours: &[HourRange::new(9, 11), HourRange::new(11, 13)],
        rationale: METAL_RATIONALE,
    },
    EnergyDipProfile {
        stem: Stem::Ren,
        strong_months: &[4, 5, 6],
        weak_months: &[3, 7],
        strong_hours: &WATER_HOURS,
        rationale: WATER_RATIONALE,
    },
    EnergyDipProfile {
        stem: Stem::Gui,
        strong_months: &[4, 5, 6],
        weak_months: &[3, 7],
        strong_hours: &WATER_HOURS,
        rationale: WATER_RATIONALE,
    },
];

/// Profile for a day stem.
pub fn profile(stem: Stem) -> Result<&'static EnergyDipProfile> {
    ENERGY_DIP_TABLE
        .iter()
        .find(|p| p.stem == stem)
        .ok_or_else(|| CoreError::UnknownStem(stem.to_string()))
}

/// Branch traditionally paired with a calendar month (1 → 丑 … 12 → 子).
pub fn month_branch(month: u32) -> Branch {
    Branch::from_index(month as i64)
}

fn month_names(months: &[u32]) -> String {
    months
        .iter()
        .map(|&m| format!("{m} ({})", month_branch(m)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn hour_names(hours: &[HourRange]) -> String {
    hours
        .iter()
        .map(|h| format!("{} hour ({}-{})", h.branch(), h.start, h.end))
        .collect::<Vec<_>>()
        .join(", ")
}

impl EnergyDipProfile {
    pub fn in_strong_month(&self, month: u32) -> bool {
        self.strong_months.contains(&month)
    }

    pub fn in_weak_month(&self, month: u32) -> bool {
        self.weak_months.contains(&month)
    }

    pub fn in_strong_hour(&self, hour: u32) -> bool {
        self.strong_hours.iter().any(|h| h.contains(hour))
    }

    pub fn explain(&self) -> String {
        indoc::formatdoc! {"
            Energy dip periods
            Your day stem is {stem}.

            Strong dip (take particular care)
            - Months: {strong_months}
            - Hours: {strong_hours}

            Mild dip (some care)
            - Months: {weak_months}

            Basis
            {rationale}

            How to spend these periods
            1. Avoid major decisions. Postpone contracts, job changes, marriage or
               investment to a time of higher energy where you can.
            2. Recharge and review. Treat the period as rest and reflection:
               health checks, study, tidying relationships, revisiting plans.
            3. Watch for misunderstandings. Judgement of people and situations
               slips; stay calm and avoid snap decisions.
            4. Old habits surface. Faults you normally keep in check come out more
               easily; stay self-aware and hold back emotional reactions.

            These are tendencies only. The balance of the whole chart and the
            current luck period change the actual effect.",
            stem = self.stem,
            strong_months = month_names(self.strong_months),
            strong_hours = hour_names(self.strong_hours),
            weak_months = month_names(self.weak_months),
            rationale = self.rationale,
        }
    }
}

/// Energy level at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    VeryLow,
    Low,
    SlightlyLow,
    Normal,
}

impl EnergyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyLevel::VeryLow => "very_low",
            EnergyLevel::Low => "low",
            EnergyLevel::SlightlyLow => "slightly_low",
            EnergyLevel::Normal => "normal",
        }
    }
}

/// Result of evaluating a profile at a month and hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyStatus {
    pub stem: Stem,
    pub month: u32,
    pub hour: u32,
    pub in_strong_month: bool,
    pub in_weak_month: bool,
    pub in_strong_hour: bool,
    pub energy_level: EnergyLevel,
}

/// Status of `stem` in calendar `month` (1-12) at `hour` (0-23).
pub fn current_status(stem: Stem, month: u32, hour: u32) -> Result<EnergyStatus> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::MonthOutOfRange(month).into());
    }
    if hour > 23 {
        return Err(ValidationError::HourOutOfRange(hour).into());
    }
    let profile = profile(stem)?;

    let in_strong_month = profile.in_strong_month(month);
    let in_weak_month = profile.in_weak_month(month);
    let in_strong_hour = profile.in_strong_hour(hour);

    let energy_level = match (in_strong_month, in_strong_hour) {
        (true, true) => EnergyLevel::VeryLow,
        (true, false) | (false, true) => EnergyLevel::Low,
        (false, false) if in_weak_month => EnergyLevel::SlightlyLow,
        (false, false) => EnergyLevel::Normal,
    };

    tracing::debug!(%stem, month, hour, level = energy_level.as_str(), "Evaluated energy status");

    Ok(EnergyStatus {
        stem,
        month,
        hour,
        in_strong_month,
        in_weak_month,
        in_strong_hour,
        energy_level,
    })
}

/// Status at a local timestamp.
pub fn status_at(stem: Stem, at: NaiveDateTime) -> Result<EnergyStatus> {
    current_status(stem, at.month(), at.hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_table_covers_every_stem() {
        for stem in Stem::ALL {
            assert_eq!(profile(stem).map(|p| p.stem).ok(), Some(stem));
        }
    }

    #[test]
    fn test_hour_range_wraps_midnight() {
        let rat = HourRange::new(23, 1);
        assert!(rat.contains(23));
        assert!(rat.contains(0));
        assert!(!rat.contains(1));
        assert!(!rat.contains(22));

        let plain = HourRange::new(3, 5);
        assert!(plain.contains(3));
        assert!(plain.contains(4));
        assert!(!plain.contains(5));
    }

    #[test]
    fn test_hour_range_branch() {
        assert_eq!(HourRange::new(23, 1).branch(), Branch::Zi);
        assert_eq!(HourRange::new(11, 13).branch(), Branch::Wu);
        assert_eq!(HourRange::new(21, 23).branch(), Branch::Hai);
    }

    #[test]
    fn test_levels() {
        // 庚: strong months 12,1,2; strong hours include the midnight wrap
        let s = current_status(Stem::Geng, 1, 0).unwrap();
        assert_eq!(s.energy_level, EnergyLevel::VeryLow);
        assert_eq!(current_status(Stem::Geng, 1, 12).unwrap().energy_level, EnergyLevel::Low);
        assert_eq!(current_status(Stem::Geng, 6, 2).unwrap().energy_level, EnergyLevel::Low);
        assert_eq!(current_status(Stem::Geng, 10, 12).unwrap().energy_level, EnergyLevel::SlightlyLow);
        assert_eq!(current_status(Stem::Geng, 6, 12).unwrap().energy_level, EnergyLevel::Normal);
    }

    #[test]
    fn test_weak_month_with_strong_hour_is_low() {
        // 甲: weak month 4, strong hour 12
        let s = current_status(Stem::Jia, 4, 12).unwrap();
        assert!(s.in_weak_month);
        assert_eq!(s.energy_level, EnergyLevel::Low);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            current_status(Stem::Jia, 13, 0),
            Err(CoreError::InvalidInput(ValidationError::MonthOutOfRange(13)))
        ));
        assert!(matches!(
            current_status(Stem::Jia, 1, 24),
            Err(CoreError::InvalidInput(ValidationError::HourOutOfRange(24)))
        ));
    }

    #[test]
    fn test_status_at_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 7, 1)
            .and_then(|d| d.and_hms_opt(14, 30, 0))
            .unwrap();
        let s = status_at(Stem::Jia, at).unwrap();
        assert_eq!((s.month, s.hour), (7, 14));
        assert_eq!(s.energy_level, EnergyLevel::VeryLow);
    }

    #[test]
    fn test_explain_lists_months_and_hours() {
        let text = profile(Stem::Ji).unwrap().explain();
        assert!(text.contains("Your day stem is 己."));
        assert!(text.contains("1 (丑), 2 (寅), 3 (卯)"));
        assert!(text.contains("寅 hour (3-5)"));
        assert!(text.contains("11 (亥), 12 (子)"));
    }
}
