use alloc::string::String;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::{ActionError, IllegalAction};

use super::Table;

/// Chips committed per player in the current betting round.
#[derive(Debug, Clone, Default)]
pub struct BetLedger {
    entries: HashMap<String, usize>,
    highest_bet: usize,
    raise_open: bool,
}

impl BetLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a round with a zero entry for each player.
    pub fn open<'a>(&mut self, player_ids: impl IntoIterator<Item = &'a str>) {
        self.entries.clear();
        for id in player_ids {
            self.entries.insert(String::from(id), 0);
        }
        self.highest_bet = 0;
        self.raise_open = false;
    }

    /// Zeroes every entry and closes raising.
    pub fn reset(&mut self) {
        for entry in self.entries.values_mut() {
            *entry = 0;
        }
        self.highest_bet = 0;
        self.raise_open = false;
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.highest_bet = 0;
        self.raise_open = false;
    }

    /// Returns the chips `player_id` has committed this round.
    #[must_use]
    pub fn entry(&self, player_id: &str) -> usize {
        self.entries.get(player_id).copied().unwrap_or(0)
    }

    /// Returns the largest entry.
    #[must_use]
    pub const fn highest_bet(&self) -> usize {
        self.highest_bet
    }

    /// Returns whether anyone has raised this round.
    #[must_use]
    pub const fn is_raise_open(&self) -> bool {
        self.raise_open
    }

    /// Returns whether nobody has committed chips this round.
    #[must_use]
    pub fn is_unopened(&self) -> bool {
        self.entries.values().all(|&entry| entry == 0)
    }

    /// Returns whether every listed player has committed the same amount.
    pub fn is_level<'a>(&self, player_ids: impl IntoIterator<Item = &'a str>) -> bool {
        let mut amounts = player_ids.into_iter().map(|id| self.entry(id));
        let Some(first) = amounts.next() else {
            return true;
        };
        amounts.all(|amount| amount == first)
    }

    /// Returns the chips committed by everyone this round.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.values().sum()
    }

    /// Adds `amount` to the player's entry.
    pub fn commit(&mut self, player_id: &str, amount: usize) {
        let entry = self.entries.entry(String::from(player_id)).or_insert(0);
        *entry += amount;
        self.highest_bet = self.highest_bet.max(*entry);
    }

    /// Marks that a raise has happened this round.
    pub const fn open_raise(&mut self) {
        self.raise_open = true;
    }

    /// Returns a copy of every entry.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, usize> {
        self.entries.clone()
    }
}

impl Table {
    /// Largest raise any player may make: the shortest stack at the table.
    pub(super) fn raise_limit(&self) -> usize {
        self.players.iter().map(crate::Player::cash).min().unwrap_or(0)
    }

    pub(super) fn raise(&mut self, index: usize, amount: usize) -> Result<(), ActionError> {
        let highest_bet = self.ledger.highest_bet();
        let limit = self.raise_limit().min(self.players[index].cash());

        if amount <= highest_bet || amount > limit {
            return Err(ActionError::IllegalAmount {
                amount,
                highest_bet,
                limit,
            });
        }

        let player = &mut self.players[index];
        player.deduct_cash(amount);
        self.ledger.commit(player.id(), amount);
        self.ledger.open_raise();
        log::trace!("{} raises {amount}", self.players[index].id());

        Ok(())
    }

    pub(super) fn call(&mut self, index: usize) -> Result<(), ActionError> {
        if !self.ledger.is_raise_open() {
            return Err(IllegalAction::CallBeforeRaise.into());
        }

        let player = &mut self.players[index];
        let delta = self
            .ledger
            .highest_bet()
            .saturating_sub(self.ledger.entry(player.id()));

        if player.cash() < delta {
            return Err(ActionError::InsufficientFunds);
        }

        player.deduct_cash(delta);
        self.ledger.commit(player.id(), delta);
        log::trace!("{} calls {delta}", self.players[index].id());

        Ok(())
    }

    pub(super) fn check(&self, index: usize) -> Result<(), ActionError> {
        if !self.ledger.is_unopened() {
            return Err(IllegalAction::CheckAfterBet.into());
        }
        log::trace!("{} checks", self.players[index].id());
        Ok(())
    }
}
