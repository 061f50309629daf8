// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Games file loading.
use anyhow::{Context, Result, bail};
use std::{cmp::Ordering, fs, path::Path};

use headsup_eval::{Card, Hand};

/// A two players game.
#[derive(Debug, Clone)]
pub struct Game {
    player_one: Hand,
    player_two: Hand,
}

impl Game {
    /// The first player hand.
    pub fn player_one(&self) -> &Hand {
        &self.player_one
    }

    /// The second player hand.
    pub fn player_two(&self) -> &Hand {
        &self.player_two
    }

    /// The game outcome.
    pub fn winner(&self) -> Winner {
        match self.player_one.cmp(&self.player_two) {
            Ordering::Greater => Winner::PlayerOne,
            Ordering::Less => Winner::PlayerTwo,
            Ordering::Equal => Winner::Tie,
        }
    }
}

/// A game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The first player has the stronger hand.
    PlayerOne,
    /// The second player has the stronger hand.
    PlayerTwo,
    /// Both hands have the same strength, the pot splits.
    Tie,
}

impl Winner {
    /// The outcome label.
    pub fn label(&self) -> &'static str {
        match self {
            Winner::PlayerOne => "Player 1",
            Winner::PlayerTwo => "Player 2",
            Winner::Tie => "Tie",
        }
    }
}

/// Loads the games in a games file.
///
/// Each line holds ten cards, the first five for player one and the last
/// five for player two. Blank lines are skipped, anything else fails with
/// the offending line number.
pub fn load(path: &Path) -> Result<Vec<Game>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read games file {}", path.display()))?;
    parse(&text)
}

fn parse(text: &str) -> Result<Vec<Game>> {
    let mut games = Vec::new();

    for (line, n) in text.lines().zip(1..) {
        if line.trim().is_empty() {
            continue;
        }

        games.push(parse_line(line).with_context(|| format!("games file line {n}"))?);
    }

    Ok(games)
}

fn parse_line(line: &str) -> Result<Game> {
    let cards = line
        .split_whitespace()
        .map(|t| t.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;

    if cards.len() != Hand::SIZE * 2 {
        bail!("expected {} cards, got {}", Hand::SIZE * 2, cards.len());
    }

    let player_one = Hand::try_from(&cards[..Hand::SIZE])?;
    let player_two = Hand::try_from(&cards[Hand::SIZE..])?;

    Ok(Game {
        player_one,
        player_two,
    })
}
