//! Command line argument parsing for the sift4 CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::Sift4Config;
use crate::tokenizer::TokenizerKind;

/// sift4 - Fast approximate string distance
#[derive(Parser, Debug, Clone)]
#[command(name = "sift4")]
#[command(about = "Fast approximate string distance using the SIFT4 algorithm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Sift4Args {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(
        short,
        long,
        value_name = "CONFIG_FILE",
        env = "SIFT4_CONFIG",
        global = true
    )]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl Sift4Args {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n.saturating_add(1),
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute the distance between two strings
    Distance(DistanceArgs),

    /// Rank candidate strings by distance to a query
    Rank(RankArgs),
}

/// Arguments for computing a single distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First string
    #[arg(value_name = "S1")]
    pub s1: String,

    /// Second string
    #[arg(value_name = "S2")]
    pub s2: String,

    /// Use the simple variant (no transpositions, per-character tokens)
    #[arg(long, conflicts_with_all = ["tokenizer", "ignore_case"])]
    pub simple: bool,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for ranking candidates
#[derive(Parser, Debug, Clone)]
pub struct RankArgs {
    /// Query to compare candidates against
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// File with one candidate per line (reads stdin if omitted)
    #[arg(long, value_name = "CANDIDATES_FILE")]
    pub candidates: Option<PathBuf>,

    /// Maximum number of results to show
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Only show candidates within this distance
    #[arg(long, value_name = "DISTANCE")]
    pub within: Option<f64>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Engine settings that override the configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Lookahead window used to resynchronize after a mismatch
    #[arg(short = 'o', long)]
    pub max_offset: Option<usize>,

    /// Stop early once the distance reaches this value (0 disables)
    #[arg(short = 'd', long)]
    pub max_distance: Option<f64>,

    /// Tokenizer: chars, graphemes, words, whitespace or ngrams:N
    #[arg(short, long)]
    pub tokenizer: Option<TokenizerKind>,

    /// Compare tokens case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,
}

impl EngineArgs {
    /// Apply command line overrides on top of a configuration.
    pub fn apply(&self, mut config: Sift4Config) -> Sift4Config {
        if let Some(max_offset) = self.max_offset {
            config.max_offset = max_offset;
        }
        if let Some(max_distance) = self.max_distance {
            config.max_distance = max_distance;
        }
        if let Some(tokenizer) = self.tokenizer {
            config.tokenizer = tokenizer;
        }
        if self.ignore_case {
            config.case_sensitive = false;
        }
        config
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_distance() {
        let args = Sift4Args::try_parse_from([
            "sift4",
            "distance",
            "kitten",
            "sitting",
            "-o",
            "5",
            "--tokenizer",
            "ngrams:2",
        ])
        .unwrap();

        match args.command {
            Command::Distance(distance) => {
                assert_eq!(distance.s1, "kitten");
                assert_eq!(distance.s2, "sitting");
                assert!(!distance.simple);
                assert_eq!(distance.engine.max_offset, Some(5));
                assert_eq!(distance.engine.tokenizer, Some(TokenizerKind::Ngrams(2)));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rank_with_globals() {
        let args = Sift4Args::try_parse_from([
            "sift4", "rank", "query", "--limit", "3", "-f", "json", "-vv",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.verbosity(), 3);
        match args.command {
            Command::Rank(rank) => {
                assert_eq!(rank.query, "query");
                assert_eq!(rank.limit, Some(3));
                assert!(rank.candidates.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_tokenizer_rejected() {
        let result =
            Sift4Args::try_parse_from(["sift4", "distance", "a", "b", "--tokenizer", "bogus"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity() {
        let args = Sift4Args::try_parse_from(["sift4", "-q", "-v", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 0);

        let args = Sift4Args::try_parse_from(["sift4", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_verbosity_saturates() {
        let mut args = Sift4Args::try_parse_from(["sift4", "-vvv", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 4);

        args.verbose = u8::MAX;
        assert_eq!(args.verbosity(), u8::MAX);
    }

    #[test]
    fn test_simple_conflicts_with_token_options() {
        for flag in ["--tokenizer=words", "--ignore-case"] {
            let argv = ["sift4", "distance", "a", "b", "--simple", flag];
            let result = Sift4Args::try_parse_from(argv);
            assert!(result.is_err(), "--simple accepted {flag}");
        }

        let argv = ["sift4", "distance", "a", "b", "--simple", "-o", "3"];
        assert!(Sift4Args::try_parse_from(argv).is_ok());
    }

    #[test]
    fn test_engine_args_override_config() {
        let config = Sift4Config {
            max_offset: 2,
            max_distance: 4.0,
            ..Default::default()
        };
        let overrides = EngineArgs {
            max_offset: Some(7),
            ignore_case: true,
            ..Default::default()
        };

        let merged = overrides.apply(config);
        assert_eq!(merged.max_offset, 7);
        assert_eq!(merged.max_distance, 4.0);
        assert_eq!(merged.tokenizer, TokenizerKind::Chars);
        assert!(!merged.case_sensitive);
    }
}
