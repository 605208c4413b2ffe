//! The general SIFT4 distance engine.
//!
//! [`Sift4`] holds two numeric thresholds and six strategy functions and
//! exposes a single computation, [`Sift4::distance`]. The engine keeps no
//! state between calls; all bookkeeping lives on the stack of one call.
//!
//! # Examples
//!
//! ```
//! use sift4::distance::Sift4;
//! use sift4::distance::evaluator::case_insensitive_match;
//!
//! let sift4 = Sift4::new().max_offset(5);
//! assert_eq!(sift4.distance("kitten", "sitting"), 3.0);
//! assert_eq!(sift4.distance("ab", "ba"), 1.0);
//!
//! let relaxed = sift4.clone().token_matcher(case_insensitive_match);
//! assert_eq!(relaxed.distance("Hello", "hello"), 0.0);
//! ```
//!
//! # Concurrency
//!
//! `Sift4` is `Send + Sync` and `distance` takes `&self`, so one engine can
//! serve many threads at once. Reconfiguring consumes the engine (or needs
//! `&mut` access to it), which the borrow checker forbids while any call is
//! in flight. To change a shared engine, clone it, configure the clone and
//! swap it in under whatever synchronization guards the shared slot.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::distance::evaluator::{
    self, LocalLengthEvaluatorFn, MatchingEvaluatorFn, TokenMatcherFn, TokenizerFn,
    TranspositionCostEvaluatorFn, TranspositionsEvaluatorFn,
};
use crate::tokenizer;

/// A past match, kept while it can still pair up with a later one as a
/// transposition.
#[derive(Debug, Clone, Copy)]
struct Offset {
    c1: usize,
    c2: usize,
    trans: bool,
}

/// SIFT4 distance engine.
#[derive(Clone)]
pub struct Sift4 {
    /// Search radius used to resynchronize cursors after a mismatch
    max_offset: usize,
    /// Early-exit threshold; 0 means unbounded
    max_distance: f64,
    tokenizer: TokenizerFn,
    token_matcher: TokenMatcherFn,
    matching_evaluator: MatchingEvaluatorFn,
    local_length_evaluator: LocalLengthEvaluatorFn,
    transposition_cost_evaluator: TranspositionCostEvaluatorFn,
    transpositions_evaluator: TranspositionsEvaluatorFn,
}

impl Sift4 {
    /// Create an engine with the default configuration: no lookahead, no
    /// early exit, per-character tokens compared for equality, and unit
    /// weights and costs throughout.
    pub fn new() -> Self {
        Sift4 {
            max_offset: evaluator::DEFAULT_MAX_OFFSET,
            max_distance: evaluator::DEFAULT_MAX_DISTANCE,
            tokenizer: Arc::new(tokenizer::chars),
            token_matcher: Arc::new(evaluator::exact_match),
            matching_evaluator: Arc::new(evaluator::unit_weight),
            local_length_evaluator: Arc::new(evaluator::identity_length),
            transposition_cost_evaluator: Arc::new(evaluator::unit_transposition_cost),
            transpositions_evaluator: Arc::new(evaluator::subtract_transpositions),
        }
    }

    /// Set how far ahead to look for a resynchronization point after a
    /// mismatch.
    pub fn max_offset(mut self, max_offset: usize) -> Self {
        self.max_offset = max_offset;
        self
    }

    /// Set the early-exit threshold. As soon as the running estimate reaches
    /// it, the scan stops and returns that estimate. Zero disables it.
    pub fn max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set the tokenizer.
    pub fn tokenizer<F>(mut self, tokenizer: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> Vec<&'a str> + Send + Sync + 'static,
    {
        self.tokenizer = Arc::new(tokenizer);
        self
    }

    /// Set the token matcher.
    pub fn token_matcher<F>(mut self, token_matcher: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        self.token_matcher = Arc::new(token_matcher);
        self
    }

    /// Set the matching evaluator.
    pub fn matching_evaluator<F>(mut self, matching_evaluator: F) -> Self
    where
        F: Fn(&str, &str) -> f64 + Send + Sync + 'static,
    {
        self.matching_evaluator = Arc::new(matching_evaluator);
        self
    }

    /// Set the local length evaluator.
    pub fn local_length_evaluator<F>(mut self, local_length_evaluator: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.local_length_evaluator = Arc::new(local_length_evaluator);
        self
    }

    /// Set the transposition cost evaluator.
    pub fn transposition_cost_evaluator<F>(mut self, transposition_cost_evaluator: F) -> Self
    where
        F: Fn(usize, usize) -> f64 + Send + Sync + 'static,
    {
        self.transposition_cost_evaluator = Arc::new(transposition_cost_evaluator);
        self
    }

    /// Set the transpositions evaluator.
    pub fn transpositions_evaluator<F>(mut self, transpositions_evaluator: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        self.transpositions_evaluator = Arc::new(transpositions_evaluator);
        self
    }

    /// Get the maximum offset.
    pub fn get_max_offset(&self) -> usize {
        self.max_offset
    }

    /// Get the early-exit threshold.
    pub fn get_max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Get the tokenizer.
    pub fn get_tokenizer(&self) -> &TokenizerFn {
        &self.tokenizer
    }

    /// Get the token matcher.
    pub fn get_token_matcher(&self) -> &TokenMatcherFn {
        &self.token_matcher
    }

    /// Get the matching evaluator.
    pub fn get_matching_evaluator(&self) -> &MatchingEvaluatorFn {
        &self.matching_evaluator
    }

    /// Get the local length evaluator.
    pub fn get_local_length_evaluator(&self) -> &LocalLengthEvaluatorFn {
        &self.local_length_evaluator
    }

    /// Get the transposition cost evaluator.
    pub fn get_transposition_cost_evaluator(&self) -> &TranspositionCostEvaluatorFn {
        &self.transposition_cost_evaluator
    }

    /// Get the transpositions evaluator.
    pub fn get_transpositions_evaluator(&self) -> &TranspositionsEvaluatorFn {
        &self.transpositions_evaluator
    }

    /// Tokenize text with the configured tokenizer.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (self.tokenizer)(text)
    }

    /// Calculate the SIFT4 distance between two strings.
    ///
    /// If either string has no tokens the result is the token count of the
    /// other. Otherwise the result is rounded half up to a whole number.
    pub fn distance(&self, s1: &str, s2: &str) -> f64 {
        let t1 = self.tokenize(s1);
        let t2 = self.tokenize(s2);
        self.distance_tokens(&t1, &t2)
    }

    /// Calculate similarity as a ratio between 0.0 and 1.0.
    /// 1.0 means identical token sequences, 0.0 means nothing in common.
    pub fn similarity(&self, s1: &str, s2: &str) -> f64 {
        let t1 = self.tokenize(s1);
        let t2 = self.tokenize(s2);
        let distance = self.distance_tokens(&t1, &t2);
        similarity_ratio(distance, t1.len(), t2.len())
    }

    /// Calculate the SIFT4 distance between two pre-tokenized sequences.
    pub fn distance_tokens<S: AsRef<str>>(&self, t1: &[S], t2: &[S]) -> f64 {
        let l1 = t1.len();
        let l2 = t2.len();

        if l1 == 0 {
            return l2 as f64;
        }
        if l2 == 0 {
            return l1 as f64;
        }

        let mut c1 = 0; // cursor into t1
        let mut c2 = 0; // cursor into t2
        let mut lcss = 0.0; // longest common subsequence
        let mut local_cs = 0.0; // local common substring
        let mut trans = 0.0; // transpositions
        let mut offsets: Vec<Offset> = Vec::new();

        while c1 < l1 && c2 < l2 {
            let a = t1[c1].as_ref();
            let b = t2[c2].as_ref();

            if (self.token_matcher)(a, b) {
                local_cs += (self.matching_evaluator)(a, b);

                let mut is_trans = false;
                let mut i = 0;
                while i < offsets.len() {
                    let ofs = offsets[i];
                    if c1 <= ofs.c1 || c2 <= ofs.c2 {
                        is_trans = c1.abs_diff(c2) >= ofs.c1.abs_diff(ofs.c2);
                        if is_trans {
                            trans += (self.transposition_cost_evaluator)(c1, c2);
                        } else if !ofs.trans {
                            offsets[i].trans = true;
                            trans += (self.transposition_cost_evaluator)(ofs.c1, ofs.c2);
                        }
                        break;
                    }

                    // Behind both cursors: can never pair with a later match
                    if c1 > ofs.c2 && c2 > ofs.c1 {
                        offsets.remove(i);
                    } else {
                        i += 1;
                    }
                }

                offsets.push(Offset {
                    c1,
                    c2,
                    trans: is_trans,
                });

                c1 += 1;
                c2 += 1;
            } else {
                lcss += (self.local_length_evaluator)(local_cs);
                local_cs = 0.0;
                if c1 != c2 {
                    c1 = c1.min(c2);
                    c2 = c1;
                }
                (c1, c2) = self.resync(t1, t2, c1, c2);
            }

            if self.max_distance > 0.0 {
                let provisional = (self.local_length_evaluator)(c1.max(c2) as f64)
                    - (self.transpositions_evaluator)(lcss, trans);
                if provisional >= self.max_distance {
                    debug!(
                        "sift4 early exit at ({c1}, {c2}) of ({l1}, {l2}): {provisional} >= {}",
                        self.max_distance
                    );
                    return round_half_up(provisional);
                }
            }

            if c1 >= l1 || c2 >= l2 {
                lcss += (self.local_length_evaluator)(local_cs);
                local_cs = 0.0;
                c1 = c1.min(c2);
                c2 = c1;
            }
        }

        lcss += (self.local_length_evaluator)(local_cs);
        round_half_up(
            (self.local_length_evaluator)(l1.max(l2) as f64)
                - (self.transpositions_evaluator)(lcss, trans),
        )
    }

    /// Look up to `max_offset` tokens ahead in either sequence for a token
    /// matching the other cursor, and return where both cursors continue.
    ///
    /// On a hit the cursor that skipped ahead lands on the match and the
    /// other stays put, so the next iteration compares the matching pair.
    /// Without a hit both cursors simply advance.
    fn resync<S: AsRef<str>>(&self, t1: &[S], t2: &[S], c1: usize, c2: usize) -> (usize, usize) {
        let l1 = t1.len();
        let l2 = t2.len();

        for i in 0..self.max_offset {
            if c1 + i >= l1 && c2 + i >= l2 {
                break;
            }
            if c1 + i < l1 && (self.token_matcher)(t1[c1 + i].as_ref(), t2[c2].as_ref()) {
                return (c1 + i, c2);
            }
            if c2 + i < l2 && (self.token_matcher)(t1[c1].as_ref(), t2[c2 + i].as_ref()) {
                return (c1, c2 + i);
            }
        }

        (c1 + 1, c2 + 1)
    }
}

impl Default for Sift4 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sift4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sift4")
            .field("max_offset", &self.max_offset)
            .field("max_distance", &self.max_distance)
            .finish_non_exhaustive()
    }
}

/// Turn a distance between sequences of `l1` and `l2` tokens into a
/// similarity between 0.0 and 1.0. Two empty sequences are identical.
pub(crate) fn similarity_ratio(distance: f64, l1: usize, l2: usize) -> f64 {
    let max_len = l1.max(l2);
    if max_len == 0 {
        return 1.0;
    }
    (1.0 - distance / max_len as f64).clamp(0.0, 1.0)
}

/// Round to the nearest integer, with halves going up.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
