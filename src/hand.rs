//! Poker hand ranking and showdown evaluation.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::ShowdownError;

/// Number of hole cards per player.
pub const HOLE_CARDS: usize = 2;

/// Number of community cards on a complete board.
pub const BOARD_CARDS: usize = 5;

/// Standard hand categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// No combination.
    HighCard,
    /// Two cards of one rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Straight and flush together.
    StraightFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HighCard => "high card",
            Self::OnePair => "one pair",
            Self::TwoPair => "two pair",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
        };
        f.write_str(name)
    }
}

/// Strength of a five-card hand.
///
/// Ordering compares the category first, then the tiebreak ranks in order of
/// significance. Unused tiebreak slots are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandRank {
    category: HandCategory,
    tiebreak: [u8; 5],
}

impl HandRank {
    /// Returns the hand category.
    #[must_use]
    pub const fn category(&self) -> HandCategory {
        self.category
    }

    /// Returns the tiebreak rank values, most significant first.
    #[must_use]
    pub const fn tiebreak(&self) -> [u8; 5] {
        self.tiebreak
    }
}

/// The best five cards a player can make, with their strength.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestHand {
    /// The player holding the hand.
    pub player_id: String,
    /// The five cards forming the hand.
    pub cards: [Card; 5],
    /// The strength of the hand.
    pub rank: HandRank,
}

/// A player contesting the showdown.
#[derive(Debug, Clone, Copy)]
pub struct Contender<'a> {
    /// Player ID.
    pub player_id: &'a str,
    /// The player's hole cards.
    pub hole_cards: &'a [Card],
}

fn straight_high(sorted_desc: &[u8; 5]) -> Option<u8> {
    if sorted_desc.windows(2).all(|w| w[0] == w[1] + 1) {
        return Some(sorted_desc[0]);
    }
    // A-5-4-3-2 plays as a five-high straight.
    if *sorted_desc == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

/// Ranks exactly five cards.
#[must_use]
pub fn evaluate_five(cards: &[Card; 5]) -> HandRank {
    let mut values = cards.map(|c| c.rank.value());
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&values);

    // (count, value) groups, biggest group first, then highest rank.
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &value in &values {
        match groups.iter_mut().find(|(_, v)| *v == value) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, value)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let mut tiebreak = [0u8; 5];
    let category = if let Some(high) = straight {
        tiebreak[0] = high;
        if flush {
            HandCategory::StraightFlush
        } else {
            HandCategory::Straight
        }
    } else {
        for (slot, &(_, value)) in tiebreak.iter_mut().zip(&groups) {
            *slot = value;
        }
        match (groups[0].0, groups.get(1).map_or(0, |g| g.0)) {
            (4, _) => HandCategory::FourOfAKind,
            (3, 2) => HandCategory::FullHouse,
            _ if flush => HandCategory::Flush,
            (3, _) => HandCategory::ThreeOfAKind,
            (2, 2) => HandCategory::TwoPair,
            (2, _) => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        }
    };

    HandRank { category, tiebreak }
}

/// Finds the strongest five-card hand among seven cards.
///
/// All 21 five-card subsets are ranked; on equal strength the first subset
/// found is kept.
#[must_use]
pub fn best_hand(cards: &[Card; 7]) -> ([Card; 5], HandRank) {
    let first = [cards[2], cards[3], cards[4], cards[5], cards[6]];
    let mut best = (first, evaluate_five(&first));

    // Each subset leaves out exactly two of the seven cards.
    for skip_a in 0..7 {
        for skip_b in (skip_a + 1)..7 {
            let mut hand = first;
            let picked = cards
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip_a && i != skip_b)
                .map(|(_, card)| *card);
            for (slot, card) in hand.iter_mut().zip(picked) {
                *slot = card;
            }

            let rank = evaluate_five(&hand);
            if rank > best.1 {
                best = (hand, rank);
            }
        }
    }

    best
}

/// Determines the winner(s) of a showdown.
///
/// Each contender's two hole cards are combined with the five community cards
/// and their best hand is kept. Every contender matching the strongest hand
/// is returned, in the order given; more than one entry means a split pot.
///
/// # Errors
///
/// Returns an error if there are no contenders, a contender does not hold
/// exactly two hole cards, or the board does not hold exactly five cards.
pub fn determine(
    contenders: &[Contender<'_>],
    community: &[Card],
) -> Result<Vec<BestHand>, ShowdownError> {
    if community.len() != BOARD_CARDS {
        return Err(ShowdownError::MalformedBoard {
            expected: BOARD_CARDS,
            found: community.len(),
        });
    }
    if contenders.is_empty() {
        return Err(ShowdownError::NoContenders);
    }

    let mut evaluated = Vec::with_capacity(contenders.len());
    for contender in contenders {
        if contender.hole_cards.len() != HOLE_CARDS {
            return Err(ShowdownError::MalformedHoleCards {
                expected: HOLE_CARDS,
                found: contender.hole_cards.len(),
            });
        }

        let mut seven = [community[0]; 7];
        for (slot, card) in seven
            .iter_mut()
            .zip(contender.hole_cards.iter().chain(community))
        {
            *slot = *card;
        }

        let (cards, rank) = best_hand(&seven);
        evaluated.push(BestHand {
            player_id: String::from(contender.player_id),
            cards,
            rank,
        });
    }

    let Some(top) = evaluated.iter().map(|hand| hand.rank).max() else {
        return Err(ShowdownError::NoContenders);
    };
    evaluated.retain(|hand| hand.rank == top);
    log::debug!(
        "showdown: {} winner(s) with {}",
        evaluated.len(),
        top.category()
    );

    Ok(evaluated)
}
