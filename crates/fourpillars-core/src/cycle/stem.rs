//! The ten heavenly stems and their element/polarity attributes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The five elements, in generating-cycle order (wood → fire → earth → metal → water).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position on the five-element ring.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// CJK symbol.
    pub fn symbol(self) -> char {
        match self {
            Element::Wood => '木',
            Element::Fire => '火',
            Element::Earth => '土',
            Element::Metal => '金',
            Element::Water => '水',
        }
    }

    /// Lowercase English name.
    pub fn name(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Element::ALL
            .into_iter()
            .find(|e| {
                trimmed.eq_ignore_ascii_case(e.name())
                    || trimmed.chars().eq(std::iter::once(e.symbol()))
            })
            .ok_or_else(|| {
                crate::error::ValidationError::invalid("element", format!("unknown element '{trimmed}'"))
                    .into()
            })
    }
}

/// Yang or yin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

/// One of the ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

const STEM_SYMBOLS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
const STEM_NAMES: [&str; 10] = [
    "jia", "yi", "bing", "ding", "wu", "ji", "geng", "xin", "ren", "gui",
];

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// Index in 0..10.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stem at a cyclic position; any integer is reduced mod 10.
    pub fn from_index(index: i64) -> Stem {
        Stem::ALL[index.rem_euclid(10) as usize]
    }

    /// Step forward (or backward, for negative `steps`) around the cycle.
    pub fn offset(self, steps: i64) -> Stem {
        Stem::from_index(self.index() as i64 + steps)
    }

    pub fn element(self) -> Element {
        Element::ALL[self.index() / 2]
    }

    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub fn symbol(self) -> char {
        STEM_SYMBOLS[self.index()]
    }

    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index()]
    }

    /// Look up a stem by its CJK symbol.
    pub fn from_symbol(symbol: char) -> Result<Stem, CoreError> {
        STEM_SYMBOLS
            .iter()
            .position(|&c| c == symbol)
            .map(|i| Stem::ALL[i])
            .ok_or_else(|| CoreError::UnknownStem(symbol.to_string()))
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Stem {
    type Err = CoreError;

    /// Accepts the CJK symbol or the romanized name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Ok(stem) = Stem::from_symbol(c) {
                return Ok(stem);
            }
        }
        STEM_NAMES
            .iter()
            .position(|name| trimmed.eq_ignore_ascii_case(name))
            .map(|i| Stem::ALL[i])
            .ok_or_else(|| CoreError::UnknownStem(trimmed.to_string()))
    }
}
