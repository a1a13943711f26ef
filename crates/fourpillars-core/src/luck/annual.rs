//! Hundred-year annual fortune table.

use serde::{Deserialize, Serialize};

use super::cycle::{LuckCycle, LuckPeriod};
use crate::cycle::{year_pillar, Pillar, Stem};
use crate::relation::{ten_god, twelve_stage, TenGod, TwelveStage};

/// Last age listed in the table.
pub const TABLE_MAX_AGE: u32 = 100;

/// Flags attached to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnualNote {
    /// A new luck period starts this year.
    LuckCycleChange,
    /// Annual stage is 帝旺 or 建禄.
    PeakEnergy,
    /// Annual stage is 死, 墓 or 絶.
    Caution,
}

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualFortune {
    pub age: u32,
    pub year: i32,
    pub annual_pillar: Pillar,
    pub luck_period: Option<LuckPeriod>,
    pub ten_god: TenGod,
    pub twelve_stage: TwelveStage,
    pub notes: Vec<AnnualNote>,
}

/// Rows for ages 1..=100; age 1 is the birth year.
pub fn hundred_year_table(birth_year: i32, day_master: Stem, luck: &LuckCycle) -> Vec<AnnualFortune> {
    (1..=TABLE_MAX_AGE)
        .map(|age| {
            let year = birth_year + age as i32 - 1;
            let annual_pillar = year_pillar(year);
            let stage = twelve_stage(day_master, annual_pillar.branch);

            let mut notes = Vec::new();
            if luck.period_starting_at(age).is_some() {
                notes.push(AnnualNote::LuckCycleChange);
            }
            if stage.is_peak_energy() {
                notes.push(AnnualNote::PeakEnergy);
            }
            if stage.is_weak() {
                notes.push(AnnualNote::Caution);
            }

            AnnualFortune {
                age,
                year,
                annual_pillar,
                luck_period: luck.period_for_age(age).copied(),
                ten_god: ten_god(day_master, annual_pillar.stem),
                twelve_stage: stage,
                notes,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::{Branch, Chart, Gender};

    fn luck() -> LuckCycle {
        let chart = Chart {
            year: Pillar::new(Stem::Ren, Branch::Xu),
            month: Pillar::new(Stem::Geng, Branch::Zi),
            day: Pillar::new(Stem::Ji, Branch::Si),
            hour: Pillar::new(Stem::Ji, Branch::Si),
        };
        LuckCycle::generate(&chart, Gender::Male)
    }

    #[test]
    fn test_table_shape() {
        let rows = hundred_year_table(1982, Stem::Ji, &luck());
        assert_eq!(rows.len(), 100);
        assert_eq!(rows[0].age, 1);
        assert_eq!(rows[0].year, 1982);
        assert_eq!(rows[0].annual_pillar.to_string(), "壬戌");
        assert_eq!(rows[99].year, 2081);
    }

    #[test]
    fn test_luck_periods_and_notes() {
        let rows = hundred_year_table(1982, Stem::Ji, &luck());
        // ages 1 and 2 precede the first luck period
        assert!(rows[0].luck_period.is_none());
        assert_eq!(rows[2].luck_period.map(|p| p.index), Some(0));
        assert!(rows[2].notes.contains(&AnnualNote::LuckCycleChange));
        assert!(rows[12].notes.contains(&AnnualNote::LuckCycleChange));
        assert!(!rows[13].notes.contains(&AnnualNote::LuckCycleChange));

        // 1983 is 癸亥; 己 at 亥 is 胎
        assert_eq!(rows[1].twelve_stage, TwelveStage::Conception);
        // 1984 is 甲子; 己 at 子 is 絶
        assert_eq!(rows[2].twelve_stage, TwelveStage::Extinction);
        assert!(rows[2].notes.contains(&AnnualNote::Caution));
        assert_eq!(rows[2].ten_god, TenGod::DirectOfficer);
    }
}
