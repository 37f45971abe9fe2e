//! Seated player state.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// A player seated at the table.
///
/// Cash persists across hands. The active flag and hole cards only describe
/// the hand in progress and are reset by the table when a new hand starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: String,
    name: String,
    cash: usize,
    active: bool,
    cards: Vec<Card>,
}

impl Player {
    /// Creates an inactive player with no cards.
    pub fn new(id: impl Into<String>, name: impl Into<String>, cash: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cash,
            active: false,
            cards: Vec::new(),
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn cash(&self) -> usize {
        self.cash
    }

    /// Returns whether the player is still contesting the current hand.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the hole cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sets whether the player is contesting the current hand.
    pub const fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Adds a hole card.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes all hole cards.
    pub fn clear_cards(&mut self) {
        self.cards.clear();
    }

    /// Adds chips to the balance.
    pub const fn add_cash(&mut self, amount: usize) {
        self.cash += amount;
    }

    /// Removes chips from the balance.
    ///
    /// Callers must check `cash() >= amount` first; the balance saturates at
    /// zero otherwise.
    pub const fn deduct_cash(&mut self, amount: usize) {
        self.cash = self.cash.saturating_sub(amount);
    }
}
