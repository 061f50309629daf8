// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Headsup Poker games runner.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
};

use headsup_eval::{Deck, Hand};

pub mod games;
pub mod table;

use games::Winner;
use table::Table;

#[derive(Debug, Parser)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plays the games in a games file and prints the results.
    Play {
        /// The games file, ten cards per line, five per player.
        #[clap(default_value = "hands.txt")]
        file: PathBuf,
    },
    /// Deals random games and writes them to a games file.
    Deal {
        /// The number of games to deal.
        #[clap(long, short, default_value_t = 10)]
        games: usize,
        /// The output games file.
        #[clap(long, short, default_value = "hands.txt")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play { file } => play(&file),
        Command::Deal { games, output } => deal(games, &output),
    }
}

/// Plays the games in a games file and prints a game by game table followed
/// by a wins summary.
fn play(path: &Path) -> Result<()> {
    let games = games::load(path)?;
    info!("Loaded {} games from {}", games.len(), path.display());

    let mut results = Table::new(&["Game", "Player 1", "Player 2", "Winner"]);
    let mut one_wins = 0;
    let mut two_wins = 0;

    for (game, n) in games.iter().zip(1..) {
        let winner = game.winner();
        match winner {
            Winner::PlayerOne => one_wins += 1,
            Winner::PlayerTwo => two_wins += 1,
            Winner::Tie => (),
        }

        results.add_row(&[
            n.to_string(),
            game.player_one().to_string(),
            game.player_two().to_string(),
            winner.label().to_string(),
        ]);
    }

    println!("{results}");

    let mut summary = Table::new(&["Player", "Wins"]);
    summary.add_row(&["Player 1".to_string(), one_wins.to_string()]);
    summary.add_row(&["Player 2".to_string(), two_wins.to_string()]);
    println!("{summary}");

    Ok(())
}

/// Deals random games and writes them to a games file, ten cards per line.
fn deal(games: usize, path: &Path) -> Result<()> {
    let mut rng = rand::rng();
    let mut lines = String::new();

    for _ in 0..games {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let cards = (0..Hand::SIZE * 2)
            .map(|_| deck.deal().to_string())
            .collect::<Vec<_>>();
        lines.push_str(&cards.join(" "));
        lines.push('\n');
    }

    fs::write(path, lines)?;
    info!("Dealt {games} games to {}", path.display());

    Ok(())
}
