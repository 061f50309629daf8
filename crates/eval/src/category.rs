// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and scores.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hand category, from the weakest [Category::OnePair] to the strongest
/// [Category::RoyalFlush].
///
/// A hand that matches no category plays as a high card hand, for which
/// [Hand::category](crate::Hand::category) returns `None`. The discriminant
/// doubles as the category score, so `Option<Category>` already orders
/// hands by category strength with `None` below them all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Two cards of one rank.
    OnePair = 1,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five distinct ranks in an unbroken run.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and a pair of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// Ten to ace in a single suit.
    RoyalFlush,
}

impl Category {
    /// This category score, from 1 for a pair up to 9 for a royal flush.
    pub fn score(self) -> u8 {
        self as u8
    }

    /// This category label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
