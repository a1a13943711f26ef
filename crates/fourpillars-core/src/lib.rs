//! # Four Pillars Core Library
//!
//! This library provides the computation engine for Four Pillars birth charts.
//! It follows a CLI-first layout: every operation is available through the
//! standalone `fourpillars-cli` binary, which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Cycle**: stem/branch cycles and the year, month, day and hour pillar
//!   derivations
//! - **Relation**: ten-god and twelve-stage classification
//! - **Luck**: decade luck cycles and the hundred-year annual table
//! - **Branch relation**: harmony/clash/punishment/harm tables and the
//!   compatibility scoring cascade
//! - **Stars**: special-star lookups
//! - **Highlight**: the smoothed life-highlight window
//! - **Energy**: the static energy-dip calendar
//! - **Storage**: TOML-based configuration
//!
//! Every computation is a pure function of its inputs and the constant tables.
//!
//! ## Key Components
//!
//! - [`chart`]: derive a [`Chart`] from [`BirthData`]
//! - [`LuckCycle`]: decade pillars for a chart and gender
//! - [`judge_compatibility`]: two-person verdict
//! - [`HighlightWindowCalculator`]: highlight window extraction
//! - [`Config`]: configuration management

pub mod branch_relation;
pub mod cycle;
pub mod energy;
pub mod error;
pub mod highlight;
pub mod luck;
pub mod relation;
pub mod stars;
pub mod storage;

pub use branch_relation::{judge_charts, judge_compatibility, CompatibilityResult, CompatibilityTier};
pub use cycle::{chart, BirthData, Branch, Chart, Element, Gender, Pillar, PillarPosition, Polarity, Stem};
pub use energy::{current_status, status_at, EnergyDipProfile, EnergyLevel, EnergyStatus};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use highlight::{BeneficialElements, HighlightPeriod, HighlightWindowCalculator};
pub use luck::{hundred_year_table, AnnualFortune, LuckCycle, LuckPeriod};
pub use relation::{analyze_chart, ten_god, twelve_stage, ChartAnalysis, TenGod, TwelveStage};
pub use stars::{special_stars, SpecialStar, SpecialStars};
pub use storage::Config;
