//! Interactive Rally Binary
//!
//! Play points by hand against the empirical model. Every point starts
//! with you waiting to serve; type a shot, see the model's reply, and
//! continue until someone wins the point.

use clap::Parser;
use colored::Colorize;
use robotennis::history::*;
use robotennis::model::*;
use robotennis::policy::*;
use robotennis::simulation::*;
use robotennis::tokens::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Play shots by hand against historical play", long_about = None)]
struct Args {
    /// JSON array of historical points
    #[arg(long, required = true)]
    records: PathBuf,
    /// JSON array of possible prompts; learned from the records when omitted
    #[arg(long)]
    prompts: Option<PathBuf>,
    #[arg(long, default_value_t = robotennis::RARITY_THRESHOLD)]
    threshold: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    robotennis::log()?;
    let records = load::<Vec<PointRecord>, _>(&args.records)?;
    let vocabulary = match args.prompts {
        Some(ref path) => Vocabulary::from(load::<Vec<Token>, _>(path)?),
        None => Vocabulary::learn(&records),
    };
    let table = TransitionTable::build(&records, &vocabulary);
    let model = Model::new(&table, args.threshold);
    let ref mut rng = rand::rng();
    loop {
        let point = Point::play(Token::waiting(), &Human, &model, rng);
        let verdict = match point.outcome() {
            Outcome::Won => point.outcome().to_string().green(),
            Outcome::Lost => point.outcome().to_string().red(),
        };
        match point.capped() {
            true => println!("rally abandoned after {} shots, point {}", point.turns(), verdict.bold()),
            false => println!("opponent played {}, point {}", point.last().as_str().bold(), verdict.bold()),
        }
        let again = dialoguer::Confirm::new()
            .with_prompt("play another point?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }
    Ok(())
}
