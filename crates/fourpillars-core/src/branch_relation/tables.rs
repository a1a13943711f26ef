//! Literal branch-combination tables.
//!
//! Declaration order is significant: triads, directional triads and
//! punishments are matched first-match-wins in the order listed here.

use serde::Serialize;

use crate::cycle::{Branch, Element};

use Branch::*;

/// Three-branch combination (three harmony or directional triad).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triad {
    pub name: &'static str,
    pub branches: [Branch; 3],
    pub element: Element,
    /// Compass direction, directional triads only.
    pub direction: Option<&'static str>,
    pub score: f64,
}

/// Two-branch relation (half combination, six harmony, clash, harm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BranchPair {
    pub branches: [Branch; 2],
    pub score: f64,
    /// Element the pair leans towards, if any.
    pub element: Option<Element>,
    /// Transformation label for six harmonies.
    pub transform: Option<&'static str>,
}

impl BranchPair {
    /// Order-insensitive match.
    pub fn matches(&self, a: Branch, b: Branch) -> bool {
        let [x, y] = self.branches;
        (x == a && y == b) || (x == b && y == a)
    }
}

/// A punishment set of two or three branches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Punishment {
    pub name: &'static str,
    pub branches: &'static [Branch],
    pub score: f64,
}

/// Multiplier applied to six-harmony and clash findings on the year branches.
pub const YEAR_BRANCH_WEIGHT: f64 = 1.5;

/// Score of a self-punishment.
pub const SELF_PUNISHMENT_SCORE: f64 = -2.0;

/// Branches that punish themselves when they appear twice.
pub static SELF_PUNISHMENT_BRANCHES: [Branch; 4] = [Chen, Wu, You, Hai];

pub static THREE_HARMONIES: [Triad; 4] = [
    Triad { name: "申子辰水局", branches: [Shen, Zi, Chen], element: Element::Water, direction: None, score: 8.0 },
    Triad { name: "亥卯未木局", branches: [Hai, Mao, Wei], element: Element::Wood, direction: None, score: 8.0 },
    Triad { name: "寅午戌火局", branches: [Yin, Wu, Xu], element: Element::Fire, direction: None, score: 8.0 },
    Triad { name: "巳酉丑金局", branches: [Si, You, Chou], element: Element::Metal, direction: None, score: 8.0 },
];

const fn half(a: Branch, b: Branch, element: Element) -> BranchPair {
    BranchPair { branches: [a, b], score: 4.0, element: Some(element), transform: None }
}

/// Two-branch subsets of [`THREE_HARMONIES`], two per triad in triad order.
pub static HALF_COMBINATIONS: [BranchPair; 8] = [
    half(Shen, Zi, Element::Water),
    half(Zi, Chen, Element::Water),
    half(Hai, Mao, Element::Wood),
    half(Mao, Wei, Element::Wood),
    half(Yin, Wu, Element::Fire),
    half(Wu, Xu, Element::Fire),
    half(Si, You, Element::Metal),
    half(You, Chou, Element::Metal),
];

pub static DIRECTIONAL_TRIADS: [Triad; 4] = [
    Triad { name: "東方木局", branches: [Yin, Mao, Chen], element: Element::Wood, direction: Some("east"), score: 6.0 },
    Triad { name: "南方火局", branches: [Si, Wu, Wei], element: Element::Fire, direction: Some("south"), score: 6.0 },
    Triad { name: "西方金局", branches: [Shen, You, Xu], element: Element::Metal, direction: Some("west"), score: 6.0 },
    Triad { name: "北方水局", branches: [Hai, Zi, Chou], element: Element::Water, direction: Some("north"), score: 6.0 },
];

const fn harmony(a: Branch, b: Branch, transform: &'static str) -> BranchPair {
    BranchPair { branches: [a, b], score: 3.0, element: None, transform: Some(transform) }
}

pub static SIX_HARMONIES: [BranchPair; 6] = [
    harmony(Zi, Chou, "earth"),
    harmony(Yin, Hai, "wood"),
    harmony(Mao, Xu, "fire"),
    harmony(Chen, You, "metal"),
    harmony(Si, Shen, "water"),
    harmony(Wu, Wei, "fire/earth"),
];

const fn opposing(a: Branch, b: Branch, score: f64) -> BranchPair {
    BranchPair { branches: [a, b], score, element: None, transform: None }
}

pub static CLASHES: [BranchPair; 6] = [
    opposing(Zi, Wu, -5.0),
    opposing(Chou, Wei, -5.0),
    opposing(Yin, Shen, -5.0),
    opposing(Mao, You, -5.0),
    opposing(Chen, Xu, -5.0),
    opposing(Si, Hai, -5.0),
];

pub static HARMS: [BranchPair; 6] = [
    opposing(Zi, Wei, -3.0),
    opposing(Chou, Wu, -3.0),
    opposing(Yin, Si, -3.0),
    opposing(Mao, Chen, -3.0),
    opposing(Shen, Hai, -3.0),
    opposing(You, Xu, -3.0),
];

pub static TRIPLE_PUNISHMENTS: [Punishment; 2] = [
    Punishment { name: "無恩之刑", branches: &[Yin, Si, Shen], score: -4.0 },
    Punishment { name: "持勢之刑", branches: &[Chou, Xu, Wei], score: -4.0 },
];

pub static PAIR_PUNISHMENTS: [Punishment; 1] = [
    Punishment { name: "無礼之刑", branches: &[Zi, Mao], score: -4.0 },
];

/// Index into [`THREE_HARMONIES`] of the triad a half combination belongs to.
pub fn parent_triad(pair: &BranchPair) -> Option<usize> {
    THREE_HARMONIES
        .iter()
        .position(|t| pair.branches.iter().all(|b| t.branches.contains(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_combinations_belong_to_triads() {
        for (i, pair) in HALF_COMBINATIONS.iter().enumerate() {
            let parent = parent_triad(pair).expect("half combination outside any triad");
            assert_eq!(parent, i / 2);
            assert_eq!(pair.element, Some(THREE_HARMONIES[parent].element));
        }
    }

    #[test]
    fn test_clashes_are_opposite_branches() {
        for pair in &CLASHES {
            let [a, b] = pair.branches;
            assert_eq!(a.offset(6), b);
        }
    }

    #[test]
    fn test_pair_matching_is_order_insensitive() {
        assert!(CLASHES[0].matches(Zi, Wu));
        assert!(CLASHES[0].matches(Wu, Zi));
        assert!(!CLASHES[0].matches(Zi, Zi));
    }
}
