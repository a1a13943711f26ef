//! Branch relations: the literal combination tables, the matching primitives
//! over them, and the scoring cascade used for compatibility.

mod compatibility;
mod matcher;
mod tables;

pub use compatibility::{
    evaluate, judge_charts, judge_compatibility, BranchEvaluation, CompatibilityResult,
    CompatibilityTier, Finding, RuleKind, SCORE_MAX, SCORE_MIN,
};
pub use matcher::{
    find_directional_triad, find_half_combinations, find_punishment, find_three_harmony,
    match_clash, match_harm, match_six_harmony, BranchMatch, BranchMultiset, PunishmentMatch,
};
pub use tables::{
    BranchPair, Punishment, Triad, CLASHES, DIRECTIONAL_TRIADS, HALF_COMBINATIONS, HARMS,
    PAIR_PUNISHMENTS, SELF_PUNISHMENT_BRANCHES, SIX_HARMONIES, THREE_HARMONIES,
    TRIPLE_PUNISHMENTS, YEAR_BRANCH_WEIGHT,
};
