//! Policy Evaluation Binary
//!
//! Builds the transition table from historical points, plays a policy
//! against it, and reports the simulated win rate next to the historical
//! baseline.
//!
//! Type "Q" + Enter to stop after the current batch, or set EVAL_DURATION.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use robotennis::history::*;
use robotennis::model::*;
use robotennis::policy::*;
use robotennis::simulation::*;
use robotennis::tokens::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Simulate a shot policy against historical play", long_about = None)]
struct Args {
    /// JSON array of historical points: {"server": [..], "receiver": [..], "won": bool}
    #[arg(long, required = true)]
    records: PathBuf,
    /// JSON object mapping each prompt to a list of shots
    #[arg(long, required = true)]
    policy: PathBuf,
    /// JSON array of possible prompts; learned from the records when omitted
    #[arg(long)]
    prompts: Option<PathBuf>,
    #[arg(long, default_value_t = robotennis::DEFAULT_POINTS)]
    points: usize,
    /// Buckets with this many observations or fewer fall back to a net error
    #[arg(long, default_value_t = robotennis::RARITY_THRESHOLD)]
    threshold: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Worker threads; defaults to one per logical core
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    robotennis::log()?;
    robotennis::brb();
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads.unwrap_or_else(num_cpus::get))
        .build_global()
        .context("configure worker threads")?;

    let records = load::<Vec<PointRecord>, _>(&args.records)?;
    let policy = load::<Policy, _>(&args.policy)?;
    let vocabulary = match args.prompts {
        Some(ref path) => Vocabulary::from(load::<Vec<Token>, _>(path)?),
        None => Vocabulary::learn(&records),
    };
    log::info!("{:<32}{}", "historical points", records.len());
    log::info!("{:<32}{}", "vocabulary", vocabulary);
    log::info!("{:<32}{} prompts", "policy", policy.len());
    log::info!("{:<32}{}", "worker threads", rayon::current_num_threads());
    for shot in policy.foreign(&vocabulary) {
        log::warn!("policy shot {} is not an allowed shot, it always meets the fallback", shot);
    }

    let table = TransitionTable::build(&records, &vocabulary);
    let serves = Serves::collect(&records, &vocabulary);
    let tally = Evaluator::new(Model::new(&table, args.threshold), &policy, &serves)
        .points(args.points)
        .seed(args.seed)
        .evaluate();
    let baseline = Baseline::from(records.as_slice());

    println!();
    println!("{:<16}{}", "simulated", format!("{:.4}", tally.rate()).green().bold());
    println!("{:<16}{}", "baseline", format!("{:.4}", baseline.rate()).yellow());
    println!("{:<16}{} won, {} lost", "points", tally.wins(), tally.losses());
    println!("{:<16}{:.2} shots", "mean rally", tally.rally());
    if tally.capped() > 0 {
        println!("{:<16}{}", "capped", tally.capped().to_string().red());
    }
    Ok(())
}
