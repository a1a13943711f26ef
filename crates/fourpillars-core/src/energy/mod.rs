//! Energy-dip module.
//!
//! This module provides the static per-day-stem energy-dip calendar and the
//! evaluation of a point in time against it.

mod dip;

pub use dip::{
    current_status, month_branch, profile, status_at, EnergyDipProfile, EnergyLevel,
    EnergyStatus, HourRange,
};
