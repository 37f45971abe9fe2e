//! Table engine and state management.

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{JoinError, ResetError};
use crate::options::TableOptions;
use crate::player::Player;
use crate::result::HandResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use bet::BetLedger;
pub use state::{Action, TableState};

/// A single Texas Hold'em table.
///
/// The table owns the deck, the seated players, the betting ledger and the
/// pot, and drives a hand from the deal to the showdown. It is a plain value:
/// callers that share a table between threads must serialize access, for
/// example through [`Session`](crate::Session).
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// Cards left to deal.
    deck: Deck,
    /// Current hand phase.
    state: TableState,
    /// Seated players in join order.
    players: Vec<Player>,
    /// Chips committed in the current betting round.
    ledger: BetLedger,
    /// Chips collected from settled rounds.
    pot: usize,
    /// Cards on the board.
    community_cards: Vec<Card>,
    /// Seat whose turn it is, `None` when no hand is live.
    current_player_index: Option<usize>,
    /// Dealer seat: opens every round and marks its completion.
    start_player_index: usize,
    /// Whether the turn has wrapped past the dealer seat this round.
    all_acted: bool,
    /// Outcome of the last finished hand.
    result: Option<HandResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a new open table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem::{Table, TableOptions, TableState};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.state(), TableState::Open);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);

        Self {
            options,
            deck,
            state: TableState::Open,
            players: Vec::new(),
            ledger: BetLedger::new(),
            pot: 0,
            community_cards: Vec::new(),
            current_player_index: None,
            start_player_index: 0,
            all_acted: false,
            result: None,
            rng,
        }
    }

    /// Seats a new player with the configured starting stack.
    ///
    /// Join order fixes the turn order; the first player to join holds the
    /// dealer seat.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is in progress, the ID is already seated or
    /// the table is full.
    pub fn add_player(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(), JoinError> {
        if self.state != TableState::Open {
            return Err(JoinError::InvalidState);
        }

        let id = id.into();
        if self.players.iter().any(|p| p.id() == id) {
            return Err(JoinError::DuplicatePlayer);
        }
        if self.players.len() >= self.options.max_players {
            return Err(JoinError::TableFull);
        }

        log::debug!("player {id} joins with {} chips", self.options.starting_cash);
        self.players
            .push(Player::new(id, name, self.options.starting_cash));
        Ok(())
    }

    /// Replaces the deck the next hand is dealt from.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is open.
    pub fn set_deck(&mut self, deck: Deck) -> Result<(), ResetError> {
        if self.state != TableState::Open {
            return Err(ResetError::InvalidState);
        }
        self.deck = deck;
        Ok(())
    }

    /// Returns the table to [`TableState::Open`] for another hand.
    ///
    /// Players keep their seats and cash. Hole cards, the board, the ledger,
    /// the pot and the last result are cleared, and a freshly shuffled deck is
    /// prepared when [`TableOptions::fresh_deck_per_hand`] is set.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is in progress.
    pub fn reset_hand(&mut self) -> Result<(), ResetError> {
        if self.state.is_betting() {
            return Err(ResetError::InvalidState);
        }

        for player in &mut self.players {
            player.clear_cards();
            player.set_active(false);
        }
        self.ledger.clear();
        self.pot = 0;
        self.community_cards.clear();
        self.current_player_index = None;
        self.all_acted = false;
        self.result = None;
        if self.options.fresh_deck_per_hand {
            self.deck = Deck::new(&mut self.rng);
        }
        self.state = TableState::Open;

        log::debug!("table reset, {} cards in deck", self.deck.remaining());
        Ok(())
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current hand phase.
    #[must_use]
    pub const fn state(&self) -> TableState {
        self.state
    }

    /// Returns the seated players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns a seated player.
    #[must_use]
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Returns a seated player for direct modification.
    ///
    /// Sitting a player out with [`Player::set_active`] is honoured by the
    /// turn order; it should not be used on the player whose turn it is.
    pub fn player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == player_id)
    }

    /// Returns the player whose turn it is, `None` when no hand is live.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_player_index
            .and_then(|index| self.players.get(index))
    }

    /// Returns the cards on the board.
    #[must_use]
    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    /// Returns the hole cards of a player, empty before the deal or for an
    /// unknown ID.
    #[must_use]
    pub fn player_cards(&self, player_id: &str) -> &[Card] {
        self.player(player_id)
            .map(Player::cards)
            .unwrap_or_default()
    }

    /// Returns the chips each player has committed this round.
    #[must_use]
    pub fn bets(&self) -> HashMap<String, usize> {
        self.ledger.snapshot()
    }

    /// Returns the betting ledger of the current round.
    #[must_use]
    pub const fn ledger(&self) -> &BetLedger {
        &self.ledger
    }

    /// Returns the chips collected from settled rounds.
    #[must_use]
    pub const fn pot(&self) -> usize {
        self.pot
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the outcome of the finished hand.
    #[must_use]
    pub const fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    /// Returns the first winner of the finished hand.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.result
            .as_ref()
            .and_then(|result| result.payouts.first())
            .and_then(|payout| self.player(&payout.player_id))
    }

    /// Returns the winning five cards, empty if the hand was not shown down.
    #[must_use]
    pub fn winning_hand(&self) -> &[Card] {
        self.result
            .as_ref()
            .and_then(|result| result.payouts.first())
            .map(|payout| payout.hand.as_slice())
            .unwrap_or_default()
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    fn active_ids(&self) -> impl Iterator<Item = &str> {
        self.players
            .iter()
            .filter(|p| p.is_active())
            .map(Player::id)
    }
}
