//! Matching primitives over branch multisets.

use serde::Serialize;

use super::tables::{
    BranchPair, Punishment, Triad, CLASHES, DIRECTIONAL_TRIADS, HALF_COMBINATIONS, HARMS,
    PAIR_PUNISHMENTS, SELF_PUNISHMENT_BRANCHES, SELF_PUNISHMENT_SCORE, SIX_HARMONIES,
    THREE_HARMONIES, TRIPLE_PUNISHMENTS,
};
use crate::cycle::Branch;

/// A multiset of branches, typically one or two charts' worth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchMultiset {
    branches: Vec<Branch>,
}

impl BranchMultiset {
    pub fn new(branches: impl IntoIterator<Item = Branch>) -> Self {
        Self {
            branches: branches.into_iter().collect(),
        }
    }

    pub fn contains(&self, branch: Branch) -> bool {
        self.branches.contains(&branch)
    }

    pub fn contains_all(&self, wanted: &[Branch]) -> bool {
        wanted.iter().all(|b| self.contains(*b))
    }

    pub fn count(&self, branch: Branch) -> usize {
        self.branches.iter().filter(|&&b| b == branch).count()
    }
}

/// How a punishment matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PunishmentMatch {
    Triple { punishment: &'static Punishment },
    Pair { punishment: &'static Punishment },
    SelfInflicted { branch: Branch },
}

impl PunishmentMatch {
    pub fn score(&self) -> f64 {
        match self {
            PunishmentMatch::Triple { punishment } | PunishmentMatch::Pair { punishment } => {
                punishment.score
            }
            PunishmentMatch::SelfInflicted { .. } => SELF_PUNISHMENT_SCORE,
        }
    }

    pub fn name(&self) -> String {
        match self {
            PunishmentMatch::Triple { punishment } | PunishmentMatch::Pair { punishment } => {
                punishment.name.to_string()
            }
            PunishmentMatch::SelfInflicted { branch } => format!("{branch} self-punishment"),
        }
    }
}

/// Result of a single matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "match", rename_all = "snake_case")]
pub enum BranchMatch {
    NoMatch,
    Triad { triad: &'static Triad },
    Pair { pair: &'static BranchPair },
    Punishment { punishment: PunishmentMatch },
}

impl BranchMatch {
    pub fn is_match(&self) -> bool {
        !matches!(self, BranchMatch::NoMatch)
    }

    /// Unweighted score of the match; zero for `NoMatch`.
    pub fn score(&self) -> f64 {
        match self {
            BranchMatch::NoMatch => 0.0,
            BranchMatch::Triad { triad } => triad.score,
            BranchMatch::Pair { pair } => pair.score,
            BranchMatch::Punishment { punishment } => punishment.score(),
        }
    }
}

fn first_triad(branches: &BranchMultiset, table: &'static [Triad]) -> BranchMatch {
    table
        .iter()
        .find(|t| branches.contains_all(&t.branches))
        .map_or(BranchMatch::NoMatch, |triad| BranchMatch::Triad { triad })
}

fn pair_in(table: &'static [BranchPair], a: Branch, b: Branch) -> BranchMatch {
    table
        .iter()
        .find(|p| p.matches(a, b))
        .map_or(BranchMatch::NoMatch, |pair| BranchMatch::Pair { pair })
}

/// First three-harmony triad fully present, in table order.
pub fn find_three_harmony(branches: &BranchMultiset) -> BranchMatch {
    first_triad(branches, &THREE_HARMONIES)
}

/// First directional triad fully present, in table order.
pub fn find_directional_triad(branches: &BranchMultiset) -> BranchMatch {
    first_triad(branches, &DIRECTIONAL_TRIADS)
}

/// Every half combination whose two members are present.
pub fn find_half_combinations(branches: &BranchMultiset) -> Vec<&'static BranchPair> {
    HALF_COMBINATIONS
        .iter()
        .filter(|p| branches.contains_all(&p.branches))
        .collect()
}

pub fn match_six_harmony(a: Branch, b: Branch) -> BranchMatch {
    pair_in(&SIX_HARMONIES, a, b)
}

pub fn match_clash(a: Branch, b: Branch) -> BranchMatch {
    pair_in(&CLASHES, a, b)
}

pub fn match_harm(a: Branch, b: Branch) -> BranchMatch {
    pair_in(&HARMS, a, b)
}

/// Punishment with triple > pair > self priority; first match wins.
pub fn find_punishment(branches: &BranchMultiset) -> BranchMatch {
    if let Some(punishment) = TRIPLE_PUNISHMENTS.iter().find(|p| branches.contains_all(p.branches)) {
        return BranchMatch::Punishment {
            punishment: PunishmentMatch::Triple { punishment },
        };
    }
    if let Some(punishment) = PAIR_PUNISHMENTS.iter().find(|p| branches.contains_all(p.branches)) {
        return BranchMatch::Punishment {
            punishment: PunishmentMatch::Pair { punishment },
        };
    }
    SELF_PUNISHMENT_BRANCHES
        .iter()
        .find(|&&b| branches.count(b) >= 2)
        .map_or(BranchMatch::NoMatch, |&branch| BranchMatch::Punishment {
            punishment: PunishmentMatch::SelfInflicted { branch },
        })
}
