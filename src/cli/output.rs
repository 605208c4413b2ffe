//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, Sift4Args};
use crate::error::Result;
use crate::matcher::Match;

/// Result structure for a single distance computation.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub s1: String,
    pub s2: String,
    pub algorithm: String,
    pub distance: f64,
    pub similarity: f64,
}

/// Result structure for ranking.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankResults {
    pub query: String,
    pub total_candidates: usize,
    pub matches: Vec<Match>,
    pub duration_ms: u64,
}

impl fmt::Display for DistanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distance:   {}", self.distance)?;
        write!(f, "Similarity: {:.4}", self.similarity)
    }
}

impl fmt::Display for RankResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches.is_empty() {
            return write!(f, "No candidates matched {:?}", self.query);
        }

        writeln!(
            f,
            "{} of {} candidates for {:?}:",
            self.matches.len(),
            self.total_candidates,
            self.query
        )?;
        for (rank, m) in self.matches.iter().enumerate() {
            write!(
                f,
                "\n{:>4}. {:<30} distance={:<6} similarity={:.4}",
                rank + 1,
                m.candidate,
                m.distance,
                m.similarity
            )?;
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &Sift4Args) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    println!("{}", render_result(message, result, args)?);
    Ok(())
}

/// Render a result in the specified format.
pub fn render_result<T>(message: &str, result: &T, args: &Sift4Args) -> Result<String>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => Ok(render_human(message, result, args)),
        OutputFormat::Json => render_json(result, args),
    }
}

fn render_human<T: fmt::Display>(message: &str, result: &T, args: &Sift4Args) -> String {
    if args.verbosity() > 1 {
        format!("{message}\n\n{result}")
    } else {
        result.to_string()
    }
}

fn render_json<T: Serialize>(result: &T, args: &Sift4Args) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
