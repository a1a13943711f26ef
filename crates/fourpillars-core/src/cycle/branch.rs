//! The twelve earthly branches.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::stem::Stem;
use crate::error::CoreError;

/// One of the twelve earthly branches, in cycle order starting at 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

const BRANCH_SYMBOLS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];
const BRANCH_NAMES: [&str; 12] = [
    "zi", "chou", "yin", "mao", "chen", "si", "wu", "wei", "shen", "you", "xu", "hai",
];

/// Principal hidden stem of each branch (main qi only).
const HIDDEN_STEMS: [Stem; 12] = [
    Stem::Gui,  // 子
    Stem::Ji,   // 丑
    Stem::Jia,  // 寅
    Stem::Yi,   // 卯
    Stem::Wu,   // 辰
    Stem::Bing, // 巳
    Stem::Ding, // 午
    Stem::Ji,   // 未
    Stem::Geng, // 申
    Stem::Xin,  // 酉
    Stem::Wu,   // 戌
    Stem::Ren,  // 亥
];

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// Index in 0..12.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Branch at a cyclic position; any integer is reduced mod 12.
    pub fn from_index(index: i64) -> Branch {
        Branch::ALL[index.rem_euclid(12) as usize]
    }

    pub fn offset(self, steps: i64) -> Branch {
        Branch::from_index(self.index() as i64 + steps)
    }

    /// The hidden stem used for month-branch relation lookups.
    pub fn hidden_stem(self) -> Stem {
        HIDDEN_STEMS[self.index()]
    }

    pub fn symbol(self) -> char {
        BRANCH_SYMBOLS[self.index()]
    }

    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index()]
    }

    /// Look up a branch by its CJK symbol.
    pub fn from_symbol(symbol: char) -> Result<Branch, CoreError> {
        BRANCH_SYMBOLS
            .iter()
            .position(|&c| c == symbol)
            .map(|i| Branch::ALL[i])
            .ok_or_else(|| CoreError::UnknownBranch(symbol.to_string()))
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Branch {
    type Err = CoreError;

    /// Accepts the CJK symbol or the romanized name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Ok(branch) = Branch::from_symbol(c) {
                return Ok(branch);
            }
        }
        BRANCH_NAMES
            .iter()
            .position(|name| trimmed.eq_ignore_ascii_case(name))
            .map(|i| Branch::ALL[i])
            .ok_or_else(|| CoreError::UnknownBranch(trimmed.to_string()))
    }
}
