//! Ten-god classification of a stem relative to the day master.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cycle::Stem;

/// Relation of a stem to the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGod {
    /// 比肩: same element, same polarity
    Companion,
    /// 劫財: same element, opposite polarity
    RobWealth,
    /// 食神: produced by the day master, same polarity
    EatingGod,
    /// 傷官: produced by the day master, opposite polarity
    HurtingOfficer,
    /// 偏財: controlled by the day master, same polarity
    IndirectWealth,
    /// 正財: controlled by the day master, opposite polarity
    DirectWealth,
    /// 偏官: controls the day master, same polarity
    SevenKillings,
    /// 正官: controls the day master, opposite polarity
    DirectOfficer,
    /// 偏印: produces the day master, same polarity
    IndirectResource,
    /// 印綬: produces the day master, opposite polarity
    DirectResource,
}

/// Indexed by element distance, then `[same polarity, opposite polarity]`.
const TEN_GOD_TABLE: [[TenGod; 2]; 5] = [
    [TenGod::Companion, TenGod::RobWealth],
    [TenGod::EatingGod, TenGod::HurtingOfficer],
    [TenGod::IndirectWealth, TenGod::DirectWealth],
    [TenGod::SevenKillings, TenGod::DirectOfficer],
    [TenGod::IndirectResource, TenGod::DirectResource],
];

impl TenGod {
    /// Traditional label.
    pub fn label(self) -> &'static str {
        match self {
            TenGod::Companion => "比肩",
            TenGod::RobWealth => "劫財",
            TenGod::EatingGod => "食神",
            TenGod::HurtingOfficer => "傷官",
            TenGod::IndirectWealth => "偏財",
            TenGod::DirectWealth => "正財",
            TenGod::SevenKillings => "偏官",
            TenGod::DirectOfficer => "正官",
            TenGod::IndirectResource => "偏印",
            TenGod::DirectResource => "印綬",
        }
    }
}

impl fmt::Display for TenGod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify `other` against the day master.
///
/// Total over the input domain: every (distance, polarity match) pair has an entry.
pub fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let distance = (other.element().rank() + 5 - day_master.element().rank()) % 5;
    let same_polarity = day_master.polarity() == other.polarity();
    TEN_GOD_TABLE[distance][usize::from(!same_polarity)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_gods_for_ji() {
        // 己 (yin earth)
        assert_eq!(ten_god(Stem::Ji, Stem::Ji), TenGod::Companion);
        assert_eq!(ten_god(Stem::Ji, Stem::Wu), TenGod::RobWealth);
        assert_eq!(ten_god(Stem::Ji, Stem::Xin), TenGod::EatingGod);
        assert_eq!(ten_god(Stem::Ji, Stem::Geng), TenGod::HurtingOfficer);
        assert_eq!(ten_god(Stem::Ji, Stem::Gui), TenGod::IndirectWealth);
        assert_eq!(ten_god(Stem::Ji, Stem::Ren), TenGod::DirectWealth);
        assert_eq!(ten_god(Stem::Ji, Stem::Yi), TenGod::SevenKillings);
        assert_eq!(ten_god(Stem::Ji, Stem::Jia), TenGod::DirectOfficer);
        assert_eq!(ten_god(Stem::Ji, Stem::Ding), TenGod::IndirectResource);
        assert_eq!(ten_god(Stem::Ji, Stem::Bing), TenGod::DirectResource);
    }

    #[test]
    fn test_every_day_master_sees_each_god_once() {
        for day in Stem::ALL {
            let mut gods: Vec<TenGod> = Stem::ALL.iter().map(|&s| ten_god(day, s)).collect();
            gods.sort_by_key(|g| g.label());
            gods.dedup();
            assert_eq!(gods.len(), 10, "day master {day}");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(TenGod::DirectResource.to_string(), "印綬");
        assert_eq!(serde_json::to_string(&TenGod::SevenKillings).unwrap(), "\"seven_killings\"");
    }
}
