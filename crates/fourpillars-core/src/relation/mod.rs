//! Stem-to-stem and stem-to-branch relation classification.

mod analysis;
mod ten_gods;
mod twelve_stages;

pub use analysis::{analyze_chart, BranchStages, ChartAnalysis, StemGods};
pub use ten_gods::{ten_god, TenGod};
pub use twelve_stages::{twelve_stage, TwelveStage};
