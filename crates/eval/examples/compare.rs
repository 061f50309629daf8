// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Deals random pairs of hands, compares them, and prints how the pots split
// and how often each category shows up.
//
// ```bash
// $ cargo r --release --example compare
// ```
use std::cmp::Ordering;

use headsup_eval::{Deck, Hand};

fn main() {
    const GAMES: usize = 100_000;

    let mut rng = rand::rng();
    let mut counts = [0usize; 10];
    let (mut wins, mut losses, mut ties) = (0, 0, 0);

    for _ in 0..GAMES {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let h1 = Hand::new(std::array::from_fn(|_| deck.deal()));
        let h2 = Hand::new(std::array::from_fn(|_| deck.deal()));

        counts[h1.score().unwrap_or(0) as usize] += 1;
        counts[h2.score().unwrap_or(0) as usize] += 1;

        match h1.cmp(&h2) {
            Ordering::Greater => wins += 1,
            Ordering::Less => losses += 1,
            Ordering::Equal => ties += 1,
        }
    }

    println!("Games:           {GAMES}");
    println!("Player one wins: {wins}");
    println!("Player two wins: {losses}");
    println!("Ties:            {ties}\n");

    println!("High Card:       {}", counts[0]);
    println!("One Pair:        {}", counts[1]);
    println!("Two Pair:        {}", counts[2]);
    println!("Three of a Kind: {}", counts[3]);
    println!("Straight:        {}", counts[4]);
    println!("Flush:           {}", counts[5]);
    println!("Full House:      {}", counts[6]);
    println!("Four of a Kind:  {}", counts[7]);
    println!("Straight Flush:  {}", counts[8]);
    println!("Royal Flush:     {}", counts[9]);
}
