//! Twelve life stages of a stem across the branches.
//!
//! Yang stems advance through the stages in branch order, yin stems run in
//! reverse. The table is literal data; fire and earth stems share a row.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cycle::{Branch, Stem};

/// Vitality stage of a stem at a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwelveStage {
    /// 長生
    Birth,
    /// 沐浴
    Bath,
    /// 冠帯
    Crown,
    /// 建禄
    Officer,
    /// 帝旺
    Peak,
    /// 衰
    Decline,
    /// 病
    Sickness,
    /// 死
    Death,
    /// 墓
    Tomb,
    /// 絶
    Extinction,
    /// 胎
    Conception,
    /// 養
    Nurture,
}

use TwelveStage::*;

/// `[stem][branch]`, branches in 子..亥 order.
static TWELVE_STAGE_TABLE: [[TwelveStage; 12]; 10] = [
    // 甲
    [Bath, Crown, Officer, Peak, Decline, Sickness, Death, Tomb, Extinction, Conception, Nurture, Birth],
    // 乙
    [Sickness, Decline, Peak, Officer, Crown, Bath, Birth, Nurture, Conception, Extinction, Tomb, Death],
    // 丙
    [Conception, Nurture, Birth, Bath, Crown, Officer, Peak, Decline, Sickness, Death, Tomb, Extinction],
    // 丁
    [Extinction, Tomb, Death, Sickness, Decline, Peak, Officer, Crown, Bath, Birth, Nurture, Conception],
    // 戊
    [Conception, Nurture, Birth, Bath, Crown, Officer, Peak, Decline, Sickness, Death, Tomb, Extinction],
    // 己
    [Extinction, Tomb, Death, Sickness, Decline, Peak, Officer, Crown, Bath, Birth, Nurture, Conception],
    // 庚
    [Death, Tomb, Extinction, Conception, Nurture, Birth, Bath, Crown, Officer, Peak, Decline, Sickness],
    // 辛
    [Birth, Nurture, Conception, Extinction, Tomb, Death, Sickness, Decline, Peak, Officer, Crown, Bath],
    // 壬
    [Peak, Decline, Sickness, Death, Tomb, Extinction, Conception, Nurture, Birth, Bath, Crown, Officer],
    // 癸
    [Officer, Crown, Bath, Birth, Nurture, Conception, Extinction, Tomb, Death, Sickness, Decline, Peak],
];

impl TwelveStage {
    /// Traditional label.
    pub fn label(self) -> &'static str {
        match self {
            Birth => "長生",
            Bath => "沐浴",
            Crown => "冠帯",
            Officer => "建禄",
            Peak => "帝旺",
            Decline => "衰",
            Sickness => "病",
            Death => "死",
            Tomb => "墓",
            Extinction => "絶",
            Conception => "胎",
            Nurture => "養",
        }
    }

    /// Strength score used by the highlight window (−6 to +8).
    pub fn score(self) -> i32 {
        match self {
            Peak => 8,
            Officer => 6,
            Crown => 3,
            Birth => 2,
            Nurture => 1,
            Conception => 0,
            Bath => 0,
            Decline => -2,
            Sickness => -2,
            Death => -4,
            Tomb => -4,
            Extinction => -6,
        }
    }

    /// 帝旺 or 建禄.
    pub fn is_peak_energy(self) -> bool {
        matches!(self, Peak | Officer)
    }

    /// 死, 墓 or 絶.
    pub fn is_weak(self) -> bool {
        matches!(self, Death | Tomb | Extinction)
    }
}

impl fmt::Display for TwelveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stage of `stem` at `branch`.
pub fn twelve_stage(stem: Stem, branch: Branch) -> TwelveStage {
    TWELVE_STAGE_TABLE[stem.index()][branch.index()]
}
