//! Hand result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::HandCategory;

/// Chips awarded to one winner.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payout {
    /// The winning player ID.
    pub player_id: String,
    /// The five cards that won, empty if every opponent folded.
    pub hand: Vec<Card>,
    /// Category of the winning hand, `None` if every opponent folded.
    pub category: Option<HandCategory>,
    /// Chips added to the player's cash.
    pub amount: usize,
}

/// Result of a finished hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// Total pot awarded.
    pub pot: usize,
    /// Winners in seat order. More than one entry means a split pot.
    pub payouts: Vec<Payout>,
    /// Whether the hand ended without a showdown.
    pub uncontested: bool,
}

impl HandResult {
    /// Returns whether the pot was split between several players.
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.payouts.len() > 1
    }
}

/// Splits `pot` evenly between `winners` players.
///
/// Odd chips go one each to the first winners in the given order.
pub(crate) fn split_pot(pot: usize, winners: usize) -> Vec<usize> {
    if winners == 0 {
        return Vec::new();
    }
    let share = pot / winners;
    let remainder = pot % winners;
    (0..winners)
        .map(|i| share + usize::from(i < remainder))
        .collect()
}
