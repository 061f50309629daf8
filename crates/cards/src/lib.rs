// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Headsup Poker cards types.
//!
//! This crate defines the cards domain for the hand comparator: the 13 [Rank]
//! symbols, the 4 [Suit] symbols, and a [Card] that orders and compares by
//! rank alone:
//!
//! ```
//! # use headsup_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let ad = Card::new(Rank::Ace, Suit::Diamonds);
//! // Suit never takes part in ordering or equality.
//! assert_eq!(ah, ad);
//! assert!(Card::new(Rank::King, Suit::Clubs) < ah);
//! ```
//!
//! Cards parse from the two symbols tokens found in games files:
//!
//! ```
//! # use headsup_cards::{Card, Rank, Suit};
//! let card = "TD".parse::<Card>().unwrap();
//! assert_eq!(card.rank(), Rank::Ten);
//! assert_eq!(card.suit(), Suit::Diamonds);
//! ```
//!
//! and a [Deck] type creates shuffled decks for dealing random games:
//!
//! ```
//! # use headsup_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let cards = (0..5).map(|_| deck.deal()).collect::<Vec<_>>();
//! assert_eq!(cards.len(), 5);
//! assert_eq!(deck.count(), Deck::SIZE - 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit};

mod deck;
pub use deck::Deck;
