mod blockchain;
mod cli;
mod miner;

use dotenvy::dotenv;
use log::warn;
use std::env;

use blockchain::{DEFAULT_DIFFICULTY, DIFF_MAX, DIFF_MIN};

fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let difficulty = env::var("DIFFICULTY")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_DIFFICULTY);
    let difficulty = if (DIFF_MIN..=DIFF_MAX).contains(&difficulty) {
        difficulty
    } else {
        warn!(
            "DIFFICULTY {} outside {}..={}; falling back to {}",
            difficulty, DIFF_MIN, DIFF_MAX, DEFAULT_DIFFICULTY
        );
        DEFAULT_DIFFICULTY
    };

    println!("⛓️ Starting in-memory blockchain (difficulty {difficulty})");

    cli::run(difficulty)
}
