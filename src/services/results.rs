//! Score read-back.
//!
//! After a scored run the benchmark writes an INI-like result file into the
//! benchmark directory. Only the `[SCORE]` section matters here: `SCORE` is
//! the headline number, `SCORE_FPSAVERAGE` the average frame rate. A missing
//! or malformed file means no score is displayed; it is never an error.

use camino::Utf8Path;
use regex::Regex;
use std::fs;

use crate::models::BenchmarkScore;

/// File the benchmark writes its result into, relative to the benchmark
/// directory.
pub const SCORE_FILE_NAME: &str = "ffxivbenchmarklauncher.ini";

/// Parser for the benchmark's result file.
pub struct ScoreReader {
    /// Matches `[Section]` header lines.
    section_pattern: Regex,
}

impl ScoreReader {
    pub fn new() -> Self {
        Self {
            section_pattern: Regex::new(r"^\s*\[([^\]]+)\]\s*$").expect("Invalid section regex"),
        }
    }

    /// Read the result file from `benchmark_dir`, if there is one.
    ///
    /// All failure modes (no file, unreadable, no `[SCORE]` section,
    /// unparseable numbers) collapse to `None` with a debug log.
    pub fn read(&self, benchmark_dir: &Utf8Path) -> Option<BenchmarkScore> {
        let path = benchmark_dir.join(SCORE_FILE_NAME);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("No result file at {}: {}", path, e);
                return None;
            }
        };

        let score = self.parse(&content);
        if score.is_none() {
            tracing::debug!("Result file {} has no usable SCORE section", path);
        }
        score
    }

    /// Parse result file contents.
    pub fn parse(&self, content: &str) -> Option<BenchmarkScore> {
        let mut in_score_section = false;
        let mut score = None;
        let mut fps_average = None;

        for line in content.lines() {
            if let Some(caps) = self.section_pattern.captures(line) {
                in_score_section = caps[1].trim().eq_ignore_ascii_case("SCORE");
                continue;
            }

            if !in_score_section {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            match key.trim() {
                "SCORE" => score = value.trim().parse::<u32>().ok(),
                "SCORE_FPSAVERAGE" => fps_average = value.trim().parse::<f32>().ok(),
                _ => {}
            }
        }

        score.map(|score| BenchmarkScore { score, fps_average })
    }
}

impl Default for ScoreReader {
    fn default() -> Self {
        Self::new()
    }
}
