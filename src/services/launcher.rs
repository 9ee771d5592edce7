//! Launching the benchmark under Wine.
//!
//! The launcher validates paths, overlays the user's environment overrides
//! onto the inherited environment, spawns
//! `<wine> <benchmark_exe> SYS....` with the benchmark directory as the
//! working directory, and waits for the process to exit. Nothing is
//! retried; a non-zero exit status is simply handed back to the caller.

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::process::Command;

use crate::models::BenchmarkScore;
use crate::services::cmdline::LaunchArgument;
use crate::services::results::ScoreReader;

/// Benchmark executable, relative to the benchmark directory.
pub const BENCHMARK_EXECUTABLE: &str = "game/ffxiv_dx11.exe";

/// Errors that refuse a launch. No process is spawned when one of these
/// is returned.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Benchmark executable ({0}) not found")]
    BenchmarkExecutableMissing(Utf8PathBuf),

    #[error("Wine executable ({0}) not found")]
    WineExecutableMissing(Utf8PathBuf),

    #[error("Failed to start process: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Everything a launch needs, captured from the UI before spawning.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub benchmark_dir: Utf8PathBuf,
    pub wine_executable: Utf8PathBuf,
    pub wine_prefix: Utf8PathBuf,
    /// Raw whitespace-separated `KEY=VALUE` override string.
    pub environment: String,
    pub arguments: Vec<LaunchArgument>,
}

/// Result of the preflight checks that passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preflight {
    /// The prefix directory does not exist. Proceeding is allowed, but the
    /// UI must get the user's confirmation first.
    pub prefix_missing: bool,
}

/// What a completed run looked like.
#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    pub exit_code: i32,
    pub duration: Duration,
    /// Present only after a successful scored run with a readable result
    /// file.
    pub score: Option<BenchmarkScore>,
}

/// Path of the benchmark executable inside `benchmark_dir`.
pub fn benchmark_executable(benchmark_dir: &Utf8Path) -> Utf8PathBuf {
    benchmark_dir.join(BENCHMARK_EXECUTABLE)
}

/// Check the plan's paths before spawning anything.
///
/// Missing executables are fatal to the launch; a missing prefix directory
/// is reported back as a soft warning.
pub fn preflight(plan: &LaunchPlan) -> Result<Preflight, LaunchError> {
    let benchmark_exe = benchmark_executable(&plan.benchmark_dir);
    if !benchmark_exe.is_file() {
        return Err(LaunchError::BenchmarkExecutableMissing(benchmark_exe));
    }

    if !plan.wine_executable.is_file() {
        return Err(LaunchError::WineExecutableMissing(
            plan.wine_executable.clone(),
        ));
    }

    Ok(Preflight {
        prefix_missing: !plan.wine_prefix.as_str().is_empty() && !plan.wine_prefix.is_dir(),
    })
}

/// Parse the whitespace-separated override string into an ordered map.
///
/// Tokens without a `=`, or with an empty key, are ignored. Later
/// duplicates win, as they would in a shell.
pub fn parse_environment_overrides(raw: &str) -> IndexMap<String, String> {
    let mut overrides = IndexMap::new();

    for token in raw.split_whitespace() {
        match token.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                overrides.insert(key.to_string(), value.to_string());
            }
            _ => {
                tracing::debug!("Ignoring malformed environment token {token:?}");
            }
        }
    }

    overrides
}

/// Spawn the benchmark and wait for it to exit.
///
/// The spawned environment is the current process environment, with
/// `WINEPREFIX` set from the plan and the user's overrides applied on top
/// (so an explicit `WINEPREFIX=` override still wins). The caller is
/// expected to have run [`preflight`] first; a disappeared executable at
/// this point surfaces as a spawn error.
pub async fn run(plan: &LaunchPlan) -> Result<LaunchOutcome, LaunchError> {
    let benchmark_exe = benchmark_executable(&plan.benchmark_dir);
    let overrides = parse_environment_overrides(&plan.environment);

    tracing::info!(
        "Launching {} via {} ({} argument(s), {} environment override(s))",
        benchmark_exe,
        plan.wine_executable,
        plan.arguments.len(),
        overrides.len()
    );

    let mut command = Command::new(plan.wine_executable.as_std_path());
    command
        .arg(benchmark_exe.as_std_path())
        .args(plan.arguments.iter().map(|a| a.to_string()))
        .current_dir(plan.benchmark_dir.as_std_path());

    if !plan.wine_prefix.as_str().is_empty() {
        command.env("WINEPREFIX", plan.wine_prefix.as_std_path());
    }
    command.envs(&overrides);

    let start = Instant::now();
    let status = command.status().await?;
    let duration = start.elapsed();
    let exit_code = status.code().unwrap_or(-1);

    tracing::info!(
        "Benchmark process finished in {:.1}s with exit code {}",
        duration.as_secs_f32(),
        exit_code
    );

    let score = if status.success() {
        ScoreReader::new().read(&plan.benchmark_dir)
    } else {
        None
    };

    if let Some(score) = &score {
        tracing::info!("{}", score.summary());
    }

    Ok(LaunchOutcome {
        exit_code,
        duration,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_executable_path() {
        assert_eq!(
            benchmark_executable(Utf8Path::new("/opt/bench")),
            Utf8PathBuf::from("/opt/bench/game/ffxiv_dx11.exe")
        );
    }

    #[test]
    fn test_parse_environment_overrides() {
        let overrides = parse_environment_overrides("A=1 B=2");
        assert_eq!(overrides.get("A").map(String::as_str), Some("1"));
        assert_eq!(overrides.get("B").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_malformed_tokens_are_ignored() {
        let overrides = parse_environment_overrides("NOEQUALS A=1 =orphan");
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("A").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_values_may_contain_equals() {
        let overrides = parse_environment_overrides("DXVK_HUD=fps,gpuload WINEDEBUG=-all,+err");
        assert_eq!(
            overrides.get("DXVK_HUD").map(String::as_str),
            Some("fps,gpuload")
        );
        assert_eq!(
            overrides.get("WINEDEBUG").map(String::as_str),
            Some("-all,+err")
        );

        let nested = parse_environment_overrides("K=a=b");
        assert_eq!(nested.get("K").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn test_later_duplicates_win_and_order_is_kept() {
        let overrides = parse_environment_overrides("A=1 B=2 A=3");
        assert_eq!(overrides.get("A").map(String::as_str), Some("3"));

        let keys: Vec<&str> = overrides.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_override_string() {
        assert!(parse_environment_overrides("").is_empty());
        assert!(parse_environment_overrides("   ").is_empty());
    }
}
