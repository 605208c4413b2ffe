//! Ranking candidate strings by SIFT4 distance to a query.
//!
//! This is the shape SIFT4 is most often used in: spelling suggestions,
//! "did you mean" lists and near-duplicate lookup, where one query is compared
//! against many candidates. Candidates are scored in parallel.

use std::cmp::Ordering;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::distance::Sift4;
use crate::distance::engine::similarity_ratio;

/// A scored candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Position of the candidate in the input.
    pub index: usize,
    /// The candidate text.
    pub candidate: String,
    /// SIFT4 distance from the query.
    pub distance: f64,
    /// Similarity to the query (0.0 to 1.0, higher is more similar).
    pub similarity: f64,
}

/// Compares one query against any number of candidates.
#[derive(Debug, Clone)]
pub struct Sift4Matcher {
    query: String,
    engine: Sift4,
}

impl Sift4Matcher {
    /// Create a matcher using an engine with a lookahead of 5 tokens.
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self::with_engine(query, Sift4::new().max_offset(5))
    }

    /// Create a matcher with a custom engine.
    pub fn with_engine<S: Into<String>>(query: S, engine: Sift4) -> Self {
        Sift4Matcher {
            query: query.into(),
            engine,
        }
    }

    /// Get the query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the engine.
    pub fn engine(&self) -> &Sift4 {
        &self.engine
    }

    /// Calculate the distance to a candidate.
    pub fn distance(&self, candidate: &str) -> f64 {
        self.engine.distance(&self.query, candidate)
    }

    /// Calculate the similarity to a candidate.
    pub fn similarity(&self, candidate: &str) -> f64 {
        self.engine.similarity(&self.query, candidate)
    }

    /// Check if a candidate is within `max_distance` of the query.
    ///
    /// The engine's own early-exit threshold is ignored here: an early exit
    /// can overshoot the full distance and reject a candidate that is in range.
    pub fn is_match(&self, candidate: &str, max_distance: f64) -> bool {
        let unbounded = self.engine.clone().max_distance(0.0);
        unbounded.distance(&self.query, candidate) <= max_distance
    }

    /// Score all candidates, closest first. Ties keep their input order.
    pub fn rank<S: AsRef<str> + Sync>(&self, candidates: &[S]) -> Vec<Match> {
        let query_tokens = self.engine.tokenize(&self.query);
        let mut matches: Vec<Match> = candidates
            .par_iter()
            .enumerate()
            .map(|(index, candidate)| self.score(&query_tokens, index, candidate.as_ref()))
            .collect();

        matches.sort_by(compare_matches);
        debug!(
            "ranked {} candidates against {:?}",
            matches.len(),
            self.query
        );
        matches
    }

    /// The `k` closest candidates.
    pub fn top<S: AsRef<str> + Sync>(&self, candidates: &[S], k: usize) -> Vec<Match> {
        let mut matches = self.rank(candidates);
        matches.truncate(k);
        matches
    }

    /// The closest candidate, if any.
    pub fn best_match<S: AsRef<str> + Sync>(&self, candidates: &[S]) -> Option<Match> {
        let query_tokens = self.engine.tokenize(&self.query);
        candidates
            .par_iter()
            .enumerate()
            .map(|(index, candidate)| self.score(&query_tokens, index, candidate.as_ref()))
            .min_by(compare_matches)
    }

    fn score(&self, query_tokens: &[&str], index: usize, candidate: &str) -> Match {
        let candidate_tokens = self.engine.tokenize(candidate);
        let distance = self.engine.distance_tokens(query_tokens, &candidate_tokens);

        Match {
            index,
            candidate: candidate.to_string(),
            distance,
            similarity: similarity_ratio(distance, query_tokens.len(), candidate_tokens.len()),
        }
    }
}

fn compare_matches(a: &Match, b: &Match) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.index.cmp(&b.index))
}
