//! Command implementations for the sift4 CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::Sift4Config;
use crate::distance::engine::similarity_ratio;
use crate::distance::{Sift4, simple_str};
use crate::error::Result;
use crate::matcher::Sift4Matcher;
use crate::tokenizer::TokenizerKind;

/// Execute a CLI command.
pub fn execute_command(args: Sift4Args) -> Result<()> {
    match &args.command {
        Command::Distance(distance_args) => compute_distance(distance_args, &args),
        Command::Rank(rank_args) => rank_candidates(rank_args, &args),
    }
}

/// Load the configuration file if one was given, then apply flag overrides.
fn load_config(engine_args: &EngineArgs, cli_args: &Sift4Args) -> Result<Sift4Config> {
    let base = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Sift4Config::from_file(path)?
        }
        None => Sift4Config::default(),
    };

    let config = engine_args.apply(base);
    debug!("Effective configuration: {config:?}");
    Ok(config)
}

fn build_engine(engine_args: &EngineArgs, cli_args: &Sift4Args) -> Result<Sift4> {
    load_config(engine_args, cli_args)?.build()
}

/// Compute the distance between two strings.
fn compute_distance(args: &DistanceArgs, cli_args: &Sift4Args) -> Result<()> {
    let config = load_config(&args.engine, cli_args)?;
    let engine = config.build()?;

    let result = if args.simple {
        if config.tokenizer != TokenizerKind::Chars || !config.case_sensitive {
            warn!(
                "--simple compares characters exactly; ignoring tokenizer {} and case_sensitive={}",
                config.tokenizer, config.case_sensitive
            );
        }

        let distance = simple_str(&args.s1, &args.s2, config.max_offset) as f64;
        let l1 = args.s1.chars().count();
        let l2 = args.s2.chars().count();
        DistanceResult {
            s1: args.s1.clone(),
            s2: args.s2.clone(),
            algorithm: "simple".to_string(),
            distance,
            similarity: similarity_ratio(distance, l1, l2),
        }
    } else {
        DistanceResult {
            s1: args.s1.clone(),
            s2: args.s2.clone(),
            algorithm: "sift4".to_string(),
            distance: engine.distance(&args.s1, &args.s2),
            similarity: engine.similarity(&args.s1, &args.s2),
        }
    };

    output_result("Distance computed", &result, cli_args)
}

/// Rank candidates read from a file or stdin.
fn rank_candidates(args: &RankArgs, cli_args: &Sift4Args) -> Result<()> {
    let engine = build_engine(&args.engine, cli_args)?;

    let candidates = match &args.candidates {
        Some(path) => read_candidates_from_file(path)?,
        None => read_candidates(io::stdin().lock())?,
    };
    info!("Ranking {} candidates", candidates.len());

    let start = Instant::now();
    let matcher = Sift4Matcher::with_engine(args.query.clone(), engine);
    let mut matches = matcher.rank(&candidates);

    if let Some(within) = args.within {
        matches.retain(|m| m.distance <= within);
    }
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }

    let results = RankResults {
        query: args.query.clone(),
        total_candidates: candidates.len(),
        matches,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    output_result("Ranking complete", &results, cli_args)
}

fn read_candidates_from_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    read_candidates(BufReader::new(file))
}

/// Read one candidate per line, skipping blank lines.
fn read_candidates<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let candidate = line.trim_end_matches('\r');
        if !candidate.trim().is_empty() {
            candidates.push(candidate.to_string());
        }
    }
    Ok(candidates)
}
