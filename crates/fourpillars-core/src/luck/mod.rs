//! Luck cycles: decade pillars and the annual fortune table built on them.

mod annual;
mod cycle;

pub use annual::{hundred_year_table, AnnualFortune, AnnualNote, TABLE_MAX_AGE};
pub use cycle::{
    Direction, LuckCycle, LuckPeriod, DEFAULT_START_AGE, LUCK_PERIOD_COUNT, LUCK_PERIOD_YEARS,
    MAX_START_AGE,
};
