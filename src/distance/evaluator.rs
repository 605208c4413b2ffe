//! Strategy functions that parameterize the SIFT4 scan.
//!
//! The engine never changes its control flow; it only asks these functions
//! how to compare tokens and how to turn what it observed into a distance.
//! All strategies must be total and pure over the inputs the engine hands
//! them (tokens of the two sequences and cursor positions within bounds).

use std::sync::Arc;

use crate::distance::simple::simple;

/// Splits input text into tokens borrowed from it.
pub type TokenizerFn = Arc<dyn for<'a> Fn(&'a str) -> Vec<&'a str> + Send + Sync>;

/// Decides whether two tokens count as equal.
pub type TokenMatcherFn = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Weight contributed by a matched token pair.
pub type MatchingEvaluatorFn = Arc<dyn Fn(&str, &str) -> f64 + Send + Sync>;

/// Maps an accumulated run length to its contribution to the distance.
pub type LocalLengthEvaluatorFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Cost charged for a transposition found at the given cursor positions.
pub type TranspositionCostEvaluatorFn = Arc<dyn Fn(usize, usize) -> f64 + Send + Sync>;

/// Combines the common subsequence weight and transposition cost.
pub type TranspositionsEvaluatorFn = Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// No lookahead when cursors fall out of step.
pub const DEFAULT_MAX_OFFSET: usize = 0;

/// Zero disables the early exit.
pub const DEFAULT_MAX_DISTANCE: f64 = 0.0;

/// Tokens match when they are identical.
pub fn exact_match(t1: &str, t2: &str) -> bool {
    t1 == t2
}

/// Every match weighs 1.
pub fn unit_weight(_t1: &str, _t2: &str) -> f64 {
    1.0
}

/// A run of length `l` contributes `l`.
pub fn identity_length(local_cs: f64) -> f64 {
    local_cs
}

/// Every transposition costs 1.
pub fn unit_transposition_cost(_c1: usize, _c2: usize) -> f64 {
    1.0
}

/// Transpositions are subtracted from the common subsequence.
pub fn subtract_transpositions(lcss: f64, trans: f64) -> f64 {
    lcss - trans
}

/// Tokens match when they are equal after Unicode lower-casing.
pub fn case_insensitive_match(t1: &str, t2: &str) -> bool {
    t1.chars()
        .flat_map(char::to_lowercase)
        .eq(t2.chars().flat_map(char::to_lowercase))
}

/// Build a token matcher that accepts tokens within `max_edits` of each other.
///
/// Intended for word tokens, where a misspelled word should still line up
/// with its correct form. Tokens are compared with the simplest SIFT4 variant
/// over characters.
pub fn similar_tokens(
    max_offset: usize,
    max_edits: usize,
) -> impl Fn(&str, &str) -> bool + Send + Sync + Clone + 'static {
    move |t1: &str, t2: &str| token_distance(t1, t2, max_offset) <= max_edits
}

/// Build a matching evaluator that weights a match by how similar the two
/// tokens are, from 0.0 (nothing in common) to 1.0 (identical).
///
/// Pair it with [`similar_tokens`] so near misses contribute partially.
pub fn token_similarity(
    max_offset: usize,
) -> impl Fn(&str, &str) -> f64 + Send + Sync + Clone + 'static {
    move |t1: &str, t2: &str| {
        let max_len = t1.chars().count().max(t2.chars().count());
        if max_len == 0 {
            return 1.0;
        }
        1.0 - token_distance(t1, t2, max_offset) as f64 / max_len as f64
    }
}

/// Rewards longer common runs: a run of length `l >= 1` contributes
/// `l - 1 / (l + 1)`, so two runs of 2 are worth less than one run of 4.
pub fn reward_long_runs(local_cs: f64) -> f64 {
    if local_cs < 1.0 {
        local_cs
    } else {
        local_cs - 1.0 / (local_cs + 1.0)
    }
}

/// Transpositions of tokens that sit far apart cost more than adjacent swaps.
pub fn longer_transpositions_cost_more(c1: usize, c2: usize) -> f64 {
    c1.abs_diff(c2) as f64 / 9.0 + 1.0
}

fn token_distance(t1: &str, t2: &str, max_offset: usize) -> usize {
    let c1: Vec<char> = t1.chars().collect();
    let c2: Vec<char> = t2.chars().collect();
    simple(&c1, &c2, max_offset)
}
