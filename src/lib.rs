//! Empirical shot-exchange simulator for tennis point strategies.
//!
//! Historical points are folded into a transition table keyed by
//! (prompt, shot). A user policy then plays points against that table
//! until a terminal token appears, and the win rate is tallied.
//!
//! # Module Structure
//!
//! - `tokens` — Shot and prompt tokens, outcome classification, vocabularies
//! - `sampling` — Repetition-weighted discrete sampler
//! - `history` — Historical point records, baseline, loaders
//! - `model` — Transition table and rarity-thresholded query
//! - `policy` — User strategies (lookup policy, interactive human)
//! - `simulation` — Single point play and aggregate evaluation
pub mod history;
pub mod model;
pub mod policy;
pub mod sampling;
pub mod simulation;
pub mod tokens;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win rates, sampling densities, and serve odds.
pub type Probability = f64;
/// Occurrence counts in buckets and tallies.
pub type Count = usize;

// ============================================================================
// TOKEN CONSTANTS
// ============================================================================
/// Prompt meaning "waiting to serve". The user opens the point.
pub const WAITING_TOKEN: &str = "X";
/// Opponent's unforced error into the net. Returned for rare or unseen
/// transitions, and always classifies as a won point for the user.
pub const FALLBACK_TOKEN: &str = "fn@";
/// Shot substituted when a policy has no entry for the current prompt.
pub const DEFAULT_SHOT: &str = "4";

// ============================================================================
// MODEL AND SIMULATION PARAMETERS
// ============================================================================
/// A transition bucket must hold strictly more continuations than this
/// before it is sampled instead of falling back.
pub const RARITY_THRESHOLD: Count = 1;
/// Maximum shots the user plays in one point before it is abandoned as lost.
pub const TURN_CAP: usize = 256;
/// Competition default for the number of simulated points.
pub const DEFAULT_POINTS: usize = 1_000_000;
/// Chance that the user serves (starts from `WAITING_TOKEN`) rather than
/// receiving a historical serve.
pub const SERVE_PROBABILITY: Probability = 0.5;
/// Points simulated between interrupt checks and progress logs.
pub const EVALUATION_BATCH_SIZE: usize = 0x10000;
/// Interval between progress log messages during evaluation.
pub const EVALUATION_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

/// Global interrupt flag for graceful shutdown coordination.
#[cfg(feature = "server")]
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Optional evaluation deadline from EVAL_DURATION env var.
#[cfg(feature = "server")]
static DEADLINE: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
/// Check if graceful shutdown was requested (via stdin "Q") or deadline reached.
#[cfg(feature = "server")]
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
        || DEADLINE
            .get()
            .map_or(false, |d| std::time::Instant::now() >= *d)
}
/// No-op interrupt check when server feature disabled.
#[cfg(not(feature = "server"))]
pub fn interrupted() -> bool {
    false
}
/// Register graceful interrupt handler. Type "Q" + Enter to stop after current batch.
/// Optionally set EVAL_DURATION env var (e.g., "90s", "5m") for timed runs.
#[cfg(feature = "server")]
pub fn brb() {
    if let Ok(duration) = std::env::var("EVAL_DURATION") {
        if let Some(deadline) = parse_duration(&duration) {
            let _ = DEADLINE.set(std::time::Instant::now() + deadline);
            log::info!("evaluation will stop after {}", duration);
        }
    }
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, finishing current batch...");
                    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}
/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
#[cfg(feature = "server")]
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(parse_duration("30s"), Some(std::time::Duration::from_secs(30)));
        assert_eq!(parse_duration("5m"), Some(std::time::Duration::from_secs(300)));
        assert_eq!(parse_duration(" 2h "), Some(std::time::Duration::from_secs(7200)));
        assert_eq!(parse_duration("1w"), None);
        assert_eq!(parse_duration("m"), None);
    }
}
