//! Pillar derivation by modular arithmetic over the 10/12/60 cycles.
//!
//! No solar-term correction is applied: the year changes on January 1st and
//! months use a fixed offset (February maps to branch 0).

use chrono::{Datelike, NaiveDate};

use super::branch::Branch;
use super::pillar::{BirthData, Chart, Pillar};
use super::stem::Stem;
use crate::error::{Result, ValidationError};

/// Year that maps to stem 0 / branch 0 (甲子).
pub const ANCHOR_YEAR: i32 = 1984;

/// Day zero of the sexagenary day count (1900-01-01, a 甲子 day), as a
/// day number from the common era.
pub const DAY_EPOCH_CE: i32 = 693_596;

/// Year pillar: offset from the anchor year on both cycles.
pub fn year_pillar(year: i32) -> Pillar {
    let diff = i64::from(year) - i64::from(ANCHOR_YEAR);
    Pillar::new(Stem::from_index(diff), Branch::from_index(diff))
}

/// Month pillar using the "five tigers" year-stem rule.
pub fn month_pillar(year: i32, month: u32) -> Result<Pillar> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::MonthOutOfRange(month).into());
    }
    let branch_index = (i64::from(month) - 2).rem_euclid(12);
    let year_stem = year_pillar(year).stem;
    let base = (year_stem.index() as i64 * 2) % 10;
    Ok(Pillar::new(
        Stem::from_index(base + branch_index),
        Branch::from_index(branch_index),
    ))
}

/// Day pillar from the day count since [`DAY_EPOCH_CE`].
pub fn day_pillar(year: i32, month: u32, day: u32) -> Result<Pillar> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ValidationError::InvalidDate { year, month, day })?;
    Ok(day_pillar_for_date(date))
}

/// Day pillar for an already valid date.
pub fn day_pillar_for_date(date: NaiveDate) -> Pillar {
    let days = i64::from(date.num_days_from_ce()) - i64::from(DAY_EPOCH_CE);
    Pillar::from_cycle_index(days)
}

/// Hour pillar; 23:00-00:59 is branch 0.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Result<Pillar> {
    if hour > 23 {
        return Err(ValidationError::HourOutOfRange(hour).into());
    }
    let branch_index = i64::from((hour + 1) / 2) % 12;
    let base = (day_stem.index() as i64 * 2) % 10;
    Ok(Pillar::new(
        Stem::from_index(base + branch_index),
        Branch::from_index(branch_index),
    ))
}

/// Derive all four pillars for validated birth data.
pub fn chart(birth: &BirthData) -> Result<Chart> {
    birth.validate()?;
    let year = year_pillar(birth.year);
    let month = month_pillar(birth.year, birth.month)?;
    let day = day_pillar(birth.year, birth.month, birth.day)?;
    let hour = hour_pillar(day.stem, birth.hour)?;
    let chart = Chart { year, month, day, hour };
    tracing::debug!(
        year = birth.year,
        month = birth.month,
        day = birth.day,
        hour = birth.hour,
        chart = %chart,
        "Derived chart"
    );
    Ok(chart)
}
