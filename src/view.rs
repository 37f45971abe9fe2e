//! Read-only snapshots of a table, as shown to one player.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{Table, TableState};
use crate::player::Player;
use crate::result::HandResult;

/// Public information about a seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    /// Player ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Chip balance.
    pub cash: usize,
    /// Whether the player is still in the hand.
    pub active: bool,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: String::from(player.id()),
            name: String::from(player.name()),
            cash: player.cash(),
            active: player.is_active(),
        }
    }
}

/// Committed chips of one player in the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetView {
    /// Player ID.
    pub player_id: String,
    /// Chips committed this round.
    pub amount: usize,
}

/// The table as seen by one player.
///
/// Only the viewer's own hole cards are included. Once a hand has been shown
/// down, [`TableView::result`] carries every winning hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableView {
    /// Current hand phase.
    pub state: TableState,
    /// The player whose turn it is.
    pub current_player: Option<PlayerView>,
    /// Seated players in join order.
    pub players: Vec<PlayerView>,
    /// Cards on the board.
    pub community_cards: Vec<Card>,
    /// The viewer's hole cards.
    pub player_cards: Vec<Card>,
    /// Chips committed this round, in seat order.
    pub bets: Vec<BetView>,
    /// Chips collected from settled rounds.
    pub pot: usize,
    /// Outcome of the finished hand.
    pub result: Option<HandResult>,
}

impl Table {
    /// Builds a snapshot of the table for `viewer`.
    ///
    /// Passing `None` (a spectator) hides every hole card.
    #[must_use]
    pub fn view(&self, viewer: Option<&str>) -> TableView {
        let bets = if self.state() == TableState::Open {
            Vec::new()
        } else {
            self.players()
                .iter()
                .map(|p| BetView {
                    player_id: String::from(p.id()),
                    amount: self.ledger().entry(p.id()),
                })
                .collect()
        };

        TableView {
            state: self.state(),
            current_player: self.current_player().map(PlayerView::from),
            players: self.players().iter().map(PlayerView::from).collect(),
            community_cards: self.community_cards().to_vec(),
            player_cards: viewer
                .map(|id| self.player_cards(id).to_vec())
                .unwrap_or_default(),
            bets,
            pot: self.pot(),
            result: self.result().cloned(),
        }
    }
}
