//! Cyclic calendar arithmetic.
//!
//! This module holds the two base cycles (10 stems, 12 branches), their
//! attributes, and the derivation of the four pillars from a birth instant.

pub mod engine;
mod branch;
mod pillar;
mod stem;

pub use branch::Branch;
pub use engine::{chart, day_pillar, day_pillar_for_date, hour_pillar, month_pillar, year_pillar, ANCHOR_YEAR};
pub use pillar::{BirthData, Chart, Gender, Pillar, PillarPosition};
pub use stem::{Element, Polarity, Stem};
