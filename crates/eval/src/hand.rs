// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hands with rank grouping and Poker ordering.
use ahash::AHashSet;
use std::{
    cmp::{Ordering, Reverse},
    fmt,
    sync::LazyLock,
};
use thiserror::Error;

use headsup_cards::{Card, Rank};

use crate::Category;

/// The ranks of a royal flush.
static ROYAL_RANKS: LazyLock<AHashSet<Rank>> = LazyLock::new(|| {
    AHashSet::from_iter([Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace])
});

/// A run of same-rank cards within a hand.
///
/// A hand groups its cards by rank, a lone card stays a [Group::Single] and
/// two or more cards of one rank become a [Group::Multiple]. Every card in a
/// multiple shares the rank, so the group rank stands for the whole group
/// when two hands break a tie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    /// A lone card.
    Single(Card),
    /// Two or more cards sharing a rank.
    Multiple(Vec<Card>),
}

impl Group {
    /// The rank shared by the cards in this group.
    pub fn rank(&self) -> Rank {
        match self {
            Group::Single(card) => card.rank(),
            Group::Multiple(cards) => cards[0].rank(),
        }
    }

    /// The number of cards in this group.
    pub fn size(&self) -> usize {
        match self {
            Group::Single(_) => 1,
            Group::Multiple(cards) => cards.len(),
        }
    }

    /// The cards in this group.
    pub fn cards(&self) -> &[Card] {
        match self {
            Group::Single(card) => std::slice::from_ref(card),
            Group::Multiple(cards) => cards,
        }
    }

    /// Adds a card of the same rank, promoting a single to a multiple.
    fn push(&mut self, card: Card) {
        match self {
            Group::Single(first) => *self = Group::Multiple(vec![*first, card]),
            Group::Multiple(cards) => cards.push(card),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Single(card) => write!(f, "{card}"),
            Group::Multiple(cards) => {
                let cards = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
                write!(f, "[{}]", cards.join(" "))
            }
        }
    }
}

/// Error for hands built from other than five cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a hand takes exactly 5 cards, got {0}")]
pub struct InvalidHandSize(usize);

/// A five cards Poker hand.
///
/// Construction sorts the cards by descending rank and groups equal ranks,
/// largest groups first, both views stay fixed for the hand lifetime. [Ord]
/// and [PartialEq] give hands the standard Poker ordering, category first
/// and the grouped ranks as tiebreak, so an equality between two hands is a
/// genuine tie that splits the pot.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; 5],
    groups: Vec<Group>,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five cards.
    ///
    /// The cards can come in any order, hands built from the same cards
    /// group the same way.
    pub fn new(cards: [Card; 5]) -> Self {
        let mut cards = cards;
        // Highest cards first, the sort is stable and suits play no part.
        cards.sort_by(|c1, c2| c2.cmp(c1));

        let mut groups: Vec<Group> = Vec::with_capacity(5);
        for card in cards {
            match groups.last_mut() {
                Some(group) if group.rank() == card.rank() => group.push(card),
                _ => groups.push(Group::Single(card)),
            }
        }

        // Larger groups in front, the stable sort keeps equal sizes in
        // descending rank order so a higher pair stays ahead of a lower one
        // and trips come before the full house pair.
        groups.sort_by_key(|g| Reverse(g.size()));

        Self { cards, groups }
    }

    /// The hand cards, highest rank first.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The rank groups, largest group first, equal sizes by descending rank.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns true if this hand contains a pair.
    pub fn is_one_pair(&self) -> bool {
        self.groups[0].size() == 2
    }

    /// Returns true if this hand contains two pairs.
    pub fn is_two_pair(&self) -> bool {
        self.groups[0].size() == 2 && self.groups[1].size() == 2
    }

    /// Returns true if this hand contains three of a kind.
    pub fn is_three_of_a_kind(&self) -> bool {
        self.groups[0].size() == 3
    }

    /// Returns true if this hand contains a straight.
    ///
    /// The ranks must be distinct and form an unbroken run. The ace only
    /// sits at the top of a run, `A K Q J T` is a straight while the ace
    /// low `5 4 3 2 A` is not.
    pub fn is_straight(&self) -> bool {
        self.groups.len() == 5
            && self
                .cards
                .windows(2)
                .all(|w| w[0].rank() as u8 == w[1].rank() as u8 + 1)
    }

    /// Returns true if this hand contains a flush.
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit)
    }

    /// Returns true if this hand contains a full house.
    pub fn is_full_house(&self) -> bool {
        self.is_three_of_a_kind() && self.groups[1].size() == 2
    }

    /// Returns true if this hand contains four of a kind.
    pub fn is_four_of_a_kind(&self) -> bool {
        self.groups[0].size() == 4
    }

    /// Returns true if this hand contains a straight flush.
    pub fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }

    /// Returns true if this hand contains a royal flush.
    pub fn is_royal_flush(&self) -> bool {
        let ranks = self.cards.iter().map(|c| c.rank()).collect::<AHashSet<_>>();
        self.is_flush() && ranks == *ROYAL_RANKS
    }

    /// The strongest category this hand matches, `None` for a high card
    /// hand.
    ///
    /// Categories overlap, a royal flush is also a straight and a flush, so
    /// the scan runs from the strongest category down and stops at the
    /// first match.
    pub fn category(&self) -> Option<Category> {
        if self.is_royal_flush() {
            Some(Category::RoyalFlush)
        } else if self.is_straight_flush() {
            Some(Category::StraightFlush)
        } else if self.is_four_of_a_kind() {
            Some(Category::FourOfAKind)
        } else if self.is_full_house() {
            Some(Category::FullHouse)
        } else if self.is_flush() {
            Some(Category::Flush)
        } else if self.is_straight() {
            Some(Category::Straight)
        } else if self.is_three_of_a_kind() {
            Some(Category::ThreeOfAKind)
        } else if self.is_two_pair() {
            Some(Category::TwoPair)
        } else if self.is_one_pair() {
            Some(Category::OnePair)
        } else {
            None
        }
    }

    /// The category score from 1 for a pair up to 9 for a royal flush,
    /// `None` for a high card hand.
    pub fn score(&self) -> Option<u8> {
        self.category().map(Category::score)
    }

    /// Resolves the order of two hands whose categories match.
    ///
    /// Walks both group lists position by position comparing group ranks,
    /// the first inequality decides and an even walk is a tie. Matching
    /// categories group into the same shape, so the walk lines up pairs
    /// with pairs and kickers with kickers.
    fn tiebreak(&self, other: &Hand) -> Ordering {
        self.groups
            .iter()
            .zip(&other.groups)
            .map(|(g1, g2)| g1.rank().cmp(&g2.rank()))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category()
            .cmp(&other.category())
            .then_with(|| self.tiebreak(other))
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl TryFrom<&[Card]> for Hand {
    type Error = InvalidHandSize;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards = <[Card; 5]>::try_from(cards).map_err(|_| InvalidHandSize(cards.len()))?;
        Ok(Hand::new(cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self.groups.iter().map(|g| g.to_string()).collect::<Vec<_>>();
        write!(f, "{}", groups.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a hand from five whitespace separated card tokens.
    fn hand(s: &str) -> Hand {
        let cards = s
            .split_whitespace()
            .map(|t| t.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        Hand::try_from(cards.as_slice()).unwrap()
    }

    /// The grouped view as (rank, size) pairs.
    fn group_shape(hand: &Hand) -> Vec<(Rank, usize)> {
        hand.groups().iter().map(|g| (g.rank(), g.size())).collect()
    }

    #[test]
    fn grouping_sorts_cards_descending() {
        let h = hand("KC 5C 5S 4C 2C");
        let ranks = h.cards().iter().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(
            ranks,
            vec![Rank::King, Rank::Five, Rank::Five, Rank::Four, Rank::Deuce]
        );
    }

    #[test]
    fn grouping_moves_larger_groups_first() {
        let h = hand("KC 5C 5S 4C 2C");
        assert_eq!(
            group_shape(&h),
            vec![
                (Rank::Five, 2),
                (Rank::King, 1),
                (Rank::Four, 1),
                (Rank::Deuce, 1)
            ]
        );
    }

    #[test]
    fn grouping_keeps_equal_sizes_by_rank() {
        // Pair of kings ahead of pair of fives.
        let h = hand("KC KS 5C 5S 2C");
        assert_eq!(
            group_shape(&h),
            vec![(Rank::King, 2), (Rank::Five, 2), (Rank::Deuce, 1)]
        );

        // Trips ahead of the full house pair.
        let h = hand("7C 7S JC JS JH");
        assert_eq!(group_shape(&h), vec![(Rank::Jack, 3), (Rank::Seven, 2)]);
    }

    #[test]
    fn grouping_is_input_order_independent() {
        let shape = group_shape(&hand("3H 7D 3S 6C 7C"));
        for permuted in ["7D 3H 3S 6C 7C", "6C 7C 7D 3S 3H", "3S 3H 6C 7D 7C"] {
            assert_eq!(group_shape(&hand(permuted)), shape);
        }
    }

    #[test]
    fn groups_always_hold_five_cards() {
        for s in [
            "3H 8D JS 6C 7C",
            "2H 8D JS 2C 7C",
            "JH JC JS 7H 7C",
            "2D 2H 2C 2S 5H",
        ] {
            let h = hand(s);
            assert_eq!(h.groups().iter().map(Group::size).sum::<usize>(), 5);
        }
    }

    #[test]
    fn hand_needs_exactly_five_cards() {
        let cards = "3H 8D JS 6C"
            .split_whitespace()
            .map(|t| t.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            Hand::try_from(cards.as_slice()).unwrap_err(),
            InvalidHandSize(4)
        );

        let cards = "3H 8D JS 6C 7C 9C"
            .split_whitespace()
            .map(|t| t.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            Hand::try_from(cards.as_slice()).unwrap_err(),
            InvalidHandSize(6)
        );
    }

    #[test]
    fn hand_display_shows_groups() {
        assert_eq!(hand("KC 5C 5S 4C 2C").to_string(), "[5C 5S] KC 4C 2C");
        assert_eq!(hand("JH JC JS 7H 7C").to_string(), "[JH JC JS] [7H 7C]");
        assert_eq!(hand("3H 8D JS 6C 7C").to_string(), "JS 8D 7C 6C 3H");
    }

    #[test]
    fn high_card() {
        let h = hand("3H 8D JS 6C 7C");
        assert_eq!(h.category(), None);
        assert_eq!(h.score(), None);
        assert!(!h.is_one_pair());
        assert!(!h.is_two_pair());
        assert!(!h.is_three_of_a_kind());
        assert!(!h.is_straight());
        assert!(!h.is_flush());
        assert!(!h.is_full_house());
        assert!(!h.is_four_of_a_kind());
        assert!(!h.is_straight_flush());
        assert!(!h.is_royal_flush());
    }

    #[test]
    fn one_pair() {
        let h = hand("2H 8D JS 2C 7C");
        assert_eq!(h.category(), Some(Category::OnePair));
        assert_eq!(h.score(), Some(1));
        assert!(h.is_one_pair());
        assert!(!h.is_two_pair());
        assert!(!h.is_three_of_a_kind());
        assert!(!h.is_full_house());
        assert!(!h.is_four_of_a_kind());
    }

    #[test]
    fn two_pair() {
        let h = hand("2H 8D JS 2C JC");
        assert_eq!(h.category(), Some(Category::TwoPair));
        assert_eq!(h.score(), Some(2));
        // The leading pair also counts as a pair.
        assert!(h.is_one_pair());
        assert!(h.is_two_pair());
        assert!(!h.is_three_of_a_kind());
        assert!(!h.is_full_house());
    }

    #[test]
    fn three_of_a_kind() {
        let h = hand("JH 8D JS 2C JC");
        assert_eq!(h.category(), Some(Category::ThreeOfAKind));
        assert_eq!(h.score(), Some(3));
        assert!(h.is_three_of_a_kind());
        assert!(!h.is_one_pair());
        assert!(!h.is_two_pair());
        assert!(!h.is_full_house());
        assert!(!h.is_four_of_a_kind());
    }

    #[test]
    fn straight() {
        let h = hand("6H 7D 8S 9C TC");
        assert_eq!(h.category(), Some(Category::Straight));
        assert_eq!(h.score(), Some(4));
        assert!(h.is_straight());
        assert!(!h.is_flush());
        assert!(!h.is_straight_flush());
        assert!(!h.is_one_pair());
    }

    #[test]
    fn flush() {
        let h = hand("6H 2H AH 7H 5H");
        assert_eq!(h.category(), Some(Category::Flush));
        assert_eq!(h.score(), Some(5));
        assert!(h.is_flush());
        assert!(!h.is_straight());
        assert!(!h.is_straight_flush());
        assert!(!h.is_royal_flush());
    }

    #[test]
    fn full_house() {
        let h = hand("JH JC JS 7H 7C");
        assert_eq!(h.category(), Some(Category::FullHouse));
        assert_eq!(h.score(), Some(6));
        assert!(h.is_full_house());
        // The trips also count as three of a kind.
        assert!(h.is_three_of_a_kind());
        assert!(!h.is_one_pair());
        assert!(!h.is_two_pair());
        assert!(!h.is_four_of_a_kind());
    }

    #[test]
    fn four_of_a_kind() {
        let h = hand("2D 2H 2C 2S 5H");
        assert_eq!(h.category(), Some(Category::FourOfAKind));
        assert_eq!(h.score(), Some(7));
        assert!(h.is_four_of_a_kind());
        assert!(!h.is_three_of_a_kind());
        assert!(!h.is_full_house());
        assert!(!h.is_one_pair());
    }

    #[test]
    fn straight_flush() {
        let h = hand("6H 7H 8H 9H TH");
        assert_eq!(h.category(), Some(Category::StraightFlush));
        assert_eq!(h.score(), Some(8));
        assert!(h.is_straight_flush());
        assert!(h.is_straight());
        assert!(h.is_flush());
        assert!(!h.is_royal_flush());
    }

    #[test]
    fn royal_flush() {
        let h = hand("TH JH QH KH AH");
        assert_eq!(h.category(), Some(Category::RoyalFlush));
        assert_eq!(h.score(), Some(9));
        assert!(h.is_royal_flush());
        assert!(h.is_straight_flush());
        assert!(h.is_straight());
        assert!(h.is_flush());
        assert!(!h.is_four_of_a_kind());
    }

    #[test]
    fn ace_low_straight_is_not_a_straight() {
        let h = hand("AH 2D 3S 4C 5C");
        assert!(!h.is_straight());
        assert_eq!(h.category(), None);
    }

    #[test]
    fn deuce_to_six_straight() {
        // The lowest straight the rank order allows.
        let h = hand("2H 3D 4S 5C 6C");
        assert!(h.is_straight());
        assert_eq!(h.category(), Some(Category::Straight));
    }

    #[test]
    fn ace_high_straight() {
        let h = hand("AH KD QS JC TC");
        assert!(h.is_straight());
        assert!(!h.is_royal_flush());
        assert_eq!(h.category(), Some(Category::Straight));
    }

    #[test]
    fn suited_wheel_is_only_a_flush() {
        let h = hand("AH 2H 3H 4H 5H");
        assert!(h.is_flush());
        assert!(!h.is_straight_flush());
        assert_eq!(h.category(), Some(Category::Flush));
    }

    #[test]
    fn categories_rank_in_order() {
        let hands = [
            hand("3H 8D JS 6C 7C"), // High card
            hand("2H 8D JS 2C 7C"), // One pair
            hand("2H 8D JS 2C JC"), // Two pair
            hand("JH 8D JS 2C JC"), // Three of a kind
            hand("6H 7D 8S 9C TC"), // Straight
            hand("6H 2H AH 7H 5H"), // Flush
            hand("JH JC JS 7H 7C"), // Full house
            hand("2D 2H 2C 2S 5H"), // Four of a kind
            hand("6H 7H 8H 9H TH"), // Straight flush
            hand("TH JH QH KH AH"), // Royal flush
        ];

        for pair in hands.windows(2) {
            assert!(pair[0] < pair[1], "{} should lose to {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn high_card_tiebreak() {
        let a = hand("3H 8D JS 6C 7C");
        let b = hand("QH 2D 9S 6S 7S");
        assert_eq!(a.category(), None);
        assert_eq!(b.category(), None);
        // Queen high beats jack high.
        assert!(b > a);
    }

    #[test]
    fn one_pair_tiebreak() {
        let a = hand("3H 8D 3S 6C 7C");
        let b = hand("QH 2D 9S 6S 2S");
        // Treys beat deuces.
        assert!(a > b);
    }

    #[test]
    fn one_pair_kicker_tiebreak() {
        let a = hand("AD AH 9C 2C 7C");
        let b = hand("AC AS 9S JS 2S");
        // Pairs match, the jack beats the nine on the kickers.
        assert!(b > a);
    }

    #[test]
    fn higher_pair_beats_lower_pair() {
        let a = hand("2H 2D 8C JS 7C");
        let b = hand("KH KD 8H JD 7S");
        assert!(b > a);
        assert!(a < b);
    }

    #[test]
    fn two_pair_tiebreak() {
        let a = hand("3H 7D 3S 6C 7C");
        let b = hand("QH 2D 2S 6S QS");
        // Queens over deuces beat sevens over treys.
        assert!(b > a);
    }

    #[test]
    fn two_pair_kicker_tiebreak() {
        let a = hand("3H 7D 3S KC 7C");
        let b = hand("3D 3C 7H 6S 7S");
        // Both sevens over treys, the king kicker wins.
        assert!(a > b);
    }

    #[test]
    fn two_pair_tie_splits_the_pot() {
        let a = hand("3H 7D 3S 6C 7C");
        let b = hand("3D 3C 7H 6S 7S");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn three_of_a_kind_tiebreak() {
        let a = hand("3H 7D 3S 3C 9C");
        let b = hand("QH QD 2S 6S QS");
        assert!(b > a);
    }

    #[test]
    fn straight_tiebreak() {
        let a = hand("3H 4D 5S 6C 7C");
        let b = hand("4H 5D 6S 7S 8S");
        // Eight high straight beats seven high.
        assert!(b > a);
    }

    #[test]
    fn flush_tiebreak() {
        let a = hand("2H 7H 6H KH 9H");
        let b = hand("2D QD 5D 9D AD");
        // Ace high flush wins.
        assert!(b > a);
    }

    #[test]
    fn equal_rank_flushes_tie_across_suits() {
        let a = hand("2H 7H 6H KH 9H");
        let b = hand("2S 7S 6S KS 9S");
        assert_eq!(a, b);
    }

    #[test]
    fn full_house_tiebreak() {
        let a = hand("2H 7H 7D 2C 7C");
        let b = hand("9D 4D 9S 4S 9C");
        // Nines full beat sevens full.
        assert!(b > a);
    }

    #[test]
    fn four_of_a_kind_tiebreak() {
        let a = hand("2H 2D 2S 2C 7C");
        let b = hand("9D 9H 9S 4S 9C");
        assert!(b > a);
    }

    #[test]
    fn straight_flush_tiebreak() {
        let a = hand("3H 4H 5H 6H 7H");
        let b = hand("4D 5D 6D 7D 8D");
        assert!(b > a);
    }

    #[test]
    fn royal_flushes_split_the_pot() {
        assert_eq!(hand("TH JH QH KH AH"), hand("TS JS QS KS AS"));
    }

    #[test]
    fn royal_flush_beats_everything() {
        let royal = hand("TH JH QH KH AH");
        for other in ["2D 2H 2C 2S 5H", "6H 7H 8H 9H TH", "AS KS QS JS 9S"] {
            assert!(royal > hand(other));
        }
    }

    #[test]
    fn comparison_is_antisymmetric() {
        let hands = [
            hand("3H 8D JS 6C 7C"),
            hand("2H 8D JS 2C 7C"),
            hand("KH KD 8H JD 7S"),
            hand("6H 7D 8S 9C TC"),
            hand("TH JH QH KH AH"),
        ];

        for h1 in &hands {
            for h2 in &hands {
                match h1.cmp(h2) {
                    Ordering::Less => assert!(h2 > h1),
                    Ordering::Greater => assert!(h2 < h1),
                    Ordering::Equal => assert!(h2 == h1),
                }
            }
        }
    }
}
