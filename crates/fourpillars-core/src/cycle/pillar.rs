//! Pillars, charts and validated birth data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::branch::Branch;
use super::stem::Stem;
use crate::error::{CoreError, ValidationError};

/// A (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at a position of the sexagenary cycle (0 = 甲子).
    pub fn from_cycle_index(index: i64) -> Self {
        let cycle = index.rem_euclid(60);
        Self {
            stem: Stem::from_index(cycle),
            branch: Branch::from_index(cycle),
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// Which of the four pillars a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const ALL: [PillarPosition; 4] = [
        PillarPosition::Year,
        PillarPosition::Month,
        PillarPosition::Day,
        PillarPosition::Hour,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PillarPosition::Year => "year",
            PillarPosition::Month => "month",
            PillarPosition::Day => "day",
            PillarPosition::Hour => "hour",
        }
    }
}

impl fmt::Display for PillarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Four pillars derived from one birth instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl Chart {
    /// The day stem, reference point for most per-person classifications.
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }

    pub fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [(PillarPosition, Pillar); 4] {
        PillarPosition::ALL.map(|p| (p, self.pillar(p)))
    }

    /// Branches in year, month, day, hour order.
    pub fn branches(&self) -> [Branch; 4] {
        [self.year.branch, self.month.branch, self.day.branch, self.hour.branch]
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Gender of the chart owner; decides luck-cycle direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            other => Err(ValidationError::invalid(
                "gender",
                format!("'{other}' is not one of male, m, female, f"),
            )
            .into()),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

/// A validated (year, month, day, hour, gender) tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthData {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub gender: Gender,
}

impl BirthData {
    /// Build birth data, rejecting impossible dates and hours.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, gender: Gender) -> Result<Self, CoreError> {
        let data = Self { year, month, day, hour, gender };
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.date()?;
        if self.hour > 23 {
            return Err(ValidationError::HourOutOfRange(self.hour));
        }
        Ok(())
    }

    pub fn date(&self) -> Result<NaiveDate, ValidationError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(ValidationError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }
}
