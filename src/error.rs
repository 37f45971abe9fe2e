//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur while drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// More cards were requested than remain in the deck.
    #[error("cannot draw {requested} cards, only {remaining} remaining")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when a player joins the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Players can only join while the table is open.
    #[error("players can only join while the table is open")]
    InvalidState,
    /// A player with the same ID is already seated.
    #[error("player is already seated")]
    DuplicatePlayer,
    /// No seats are left.
    #[error("table is full")]
    TableFull,
}

/// Errors that can occur when starting a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The hand has already started.
    #[error("invalid game state for starting a hand")]
    InvalidState,
    /// Fewer than two players are seated.
    #[error("Insufficient number of players present, current player count {count}")]
    InsufficientPlayers {
        /// Number of seated players.
        count: usize,
    },
    /// The deck cannot cover the hole cards and the board.
    #[error(transparent)]
    Deck(#[from] DrawError),
}

/// A betting action that is not allowed at this point of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalAction {
    /// Call without a prior raise in the round.
    #[error("CALL action cannot be performed before RAISE")]
    CallBeforeRaise,
    /// Check after chips have been committed in the round.
    #[error("Cannot perform CHECK when previous players have not performed CHECK")]
    CheckAfterBet,
}

/// Errors that can occur while evaluating a showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// No player is contesting the pot.
    #[error("no players to evaluate")]
    NoContenders,
    /// A player does not hold exactly two hole cards.
    #[error("expected {expected} hole cards, found {found}")]
    MalformedHoleCards {
        /// Required number of hole cards.
        expected: usize,
        /// Number of hole cards supplied.
        found: usize,
    },
    /// The board does not hold exactly five community cards.
    #[error("expected {expected} community cards, found {found}")]
    MalformedBoard {
        /// Required number of community cards.
        expected: usize,
        /// Number of community cards supplied.
        found: usize,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No betting round is in progress.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The action is not allowed at this point of the round.
    #[error(transparent)]
    IllegalAction(#[from] IllegalAction),
    /// The raise amount is out of bounds.
    #[error("illegal raise amount {amount}: must exceed {highest_bet} and not exceed {limit}")]
    IllegalAmount {
        /// Requested raise.
        amount: usize,
        /// Highest bet of the round.
        highest_bet: usize,
        /// Largest raise allowed (the shortest stack at the table).
        limit: usize,
    },
    /// The player cannot cover the call.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// The deck ran out while dealing the board.
    #[error(transparent)]
    Deck(#[from] DrawError),
    /// The showdown could not be evaluated.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}

/// Errors that can occur when resetting the table for a new hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    /// A hand is in progress.
    #[error("invalid game state for resetting the table")]
    InvalidState,
}
