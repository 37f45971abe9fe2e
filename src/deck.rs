//! The shuffled deck a table deals from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// An ordered deck of cards. Cards are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds all 52 cards and shuffles them with the given RNG.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::ordered_cards();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck that yields `cards` in the given order.
    ///
    /// No check is made for duplicates or completeness, which makes this
    /// suitable for replaying a recorded hand.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    fn ordered_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Removes and returns the first `n` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InsufficientCards`] if fewer than `n` cards remain.
    /// The deck is left untouched in that case.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DrawError> {
        if n > self.cards.len() {
            return Err(DrawError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Removes and returns the first card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InsufficientCards`] if the deck is empty.
    pub fn draw_one(&mut self) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::InsufficientCards {
                requested: 1,
                remaining: 0,
            });
        }
        Ok(self.cards.remove(0))
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
