// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Headsup Poker hand evaluator.
//!
//! A [Hand] holds five cards grouped by rank. It classifies itself into a
//! [Category] and orders against other hands with the standard Poker rules,
//! category first and grouped ranks as the tiebreak, so that two hands
//! compare with the usual operators and an equality is a genuine split pot:
//!
//! ```
//! use headsup_eval::{Card, Category, Hand, Rank, Suit};
//!
//! let kings = Hand::new([
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::King, Suit::Diamonds),
//!     Card::new(Rank::Eight, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Diamonds),
//!     Card::new(Rank::Seven, Suit::Spades),
//! ]);
//! let deuces = Hand::new([
//!     Card::new(Rank::Deuce, Suit::Hearts),
//!     Card::new(Rank::Deuce, Suit::Diamonds),
//!     Card::new(Rank::Eight, Suit::Clubs),
//!     Card::new(Rank::Jack, Suit::Spades),
//!     Card::new(Rank::Seven, Suit::Clubs),
//! ]);
//!
//! assert_eq!(kings.category(), Some(Category::OnePair));
//! assert_eq!(deuces.category(), Some(Category::OnePair));
//! assert!(kings > deuces);
//! ```
//!
//! Hands also build from parsed card tokens:
//!
//! ```
//! use headsup_eval::{Card, Hand};
//!
//! let cards = "TH JH QH KH AH"
//!     .split_whitespace()
//!     .map(|t| t.parse::<Card>())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! let royal = Hand::try_from(cards.as_slice()).unwrap();
//! assert_eq!(royal.score(), Some(9));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod category;
pub use category::Category;

pub mod hand;
pub use hand::{Group, Hand, InvalidHandSize};

// Reexport cards types.
pub use headsup_cards::{Card, Deck, ParseCardError, Rank, Suit};
