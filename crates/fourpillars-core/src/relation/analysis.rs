//! Per-chart annotation with ten gods and twelve stages.

use serde::{Deserialize, Serialize};

use super::ten_gods::{ten_god, TenGod};
use super::twelve_stages::{twelve_stage, TwelveStage};
use crate::cycle::{Chart, Element, Polarity, Stem};

/// Ten gods of the visible stems other than the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemGods {
    pub year: TenGod,
    pub month: TenGod,
    pub hour: TenGod,
}

/// Twelve stage of the day master at each branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchStages {
    pub year: TwelveStage,
    pub month: TwelveStage,
    pub day: TwelveStage,
    pub hour: TwelveStage,
}

/// Relation annotations for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    pub day_master: Stem,
    pub day_master_element: Element,
    pub day_master_polarity: Polarity,
    pub ten_gods: StemGods,
    /// Ten god of the month branch's hidden stem.
    pub month_branch_god: TenGod,
    pub twelve_stages: BranchStages,
}

/// Annotate a chart relative to its day master.
pub fn analyze_chart(chart: &Chart) -> ChartAnalysis {
    let dm = chart.day_master();
    ChartAnalysis {
        day_master: dm,
        day_master_element: dm.element(),
        day_master_polarity: dm.polarity(),
        ten_gods: StemGods {
            year: ten_god(dm, chart.year.stem),
            month: ten_god(dm, chart.month.stem),
            hour: ten_god(dm, chart.hour.stem),
        },
        month_branch_god: ten_god(dm, chart.month.branch.hidden_stem()),
        twelve_stages: BranchStages {
            year: twelve_stage(dm, chart.year.branch),
            month: twelve_stage(dm, chart.month.branch),
            day: twelve_stage(dm, chart.day.branch),
            hour: twelve_stage(dm, chart.hour.branch),
        },
    }
}
