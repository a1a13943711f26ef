//! Decade luck-cycle generation.

use serde::{Deserialize, Serialize};

use crate::cycle::{Chart, Gender, Pillar, Polarity};

/// Number of decade periods generated per chart.
pub const LUCK_PERIOD_COUNT: usize = 10;

/// Years covered by one luck period.
pub const LUCK_PERIOD_YEARS: u32 = 10;

/// Starting age used when no configuration overrides it.
///
/// A fixed value; deriving it from the distance to the nearest solar term is
/// not done here.
pub const DEFAULT_START_AGE: u32 = 3;

/// Largest starting age accepted from configuration.
pub const MAX_START_AGE: u32 = 100;

/// Direction the luck pillars step away from the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Forward for yang-year males and yin-year females.
    pub fn for_chart(chart: &Chart, gender: Gender) -> Self {
        let yang_year = chart.year.stem.polarity() == Polarity::Yang;
        let female = gender == Gender::Female;
        if yang_year ^ female {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// One decade of the luck cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckPeriod {
    /// Zero-based position in the cycle.
    pub index: usize,
    pub pillar: Pillar,
    pub start_age: u32,
}

impl LuckPeriod {
    pub fn end_age(&self) -> u32 {
        self.start_age.saturating_add(LUCK_PERIOD_YEARS - 1)
    }

    pub fn covers(&self, age: u32) -> bool {
        (self.start_age..=self.end_age()).contains(&age)
    }
}

/// Ordered ten-entry decade sequence for one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckCycle {
    pub direction: Direction,
    pub start_age: u32,
    pub periods: Vec<LuckPeriod>,
}

impl LuckCycle {
    /// Generate with the default starting age.
    pub fn generate(chart: &Chart, gender: Gender) -> Self {
        Self::generate_with_start_age(chart, gender, DEFAULT_START_AGE)
    }

    /// Generate with an explicit starting age.
    pub fn generate_with_start_age(chart: &Chart, gender: Gender, start_age: u32) -> Self {
        let direction = Direction::for_chart(chart, gender);
        let sign = direction.sign();
        let month = chart.month;

        let periods = (0..LUCK_PERIOD_COUNT)
            .map(|i| {
                let steps = sign * (i as i64 + 1);
                LuckPeriod {
                    index: i,
                    pillar: Pillar::new(month.stem.offset(steps), month.branch.offset(steps)),
                    start_age: start_age.saturating_add(LUCK_PERIOD_YEARS * i as u32),
                }
            })
            .collect();

        tracing::debug!(?direction, start_age, month = %month, "Generated luck cycle");

        Self {
            direction,
            start_age,
            periods,
        }
    }

    /// Period covering `age`, if the age falls inside the cycle.
    pub fn period_for_age(&self, age: u32) -> Option<&LuckPeriod> {
        let offset = age.checked_sub(self.start_age)?;
        self.periods.get((offset / LUCK_PERIOD_YEARS) as usize)
    }

    /// Period that starts exactly at `age`.
    pub fn period_starting_at(&self, age: u32) -> Option<&LuckPeriod> {
        self.periods.iter().find(|p| p.start_age == age)
    }
}
