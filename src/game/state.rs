//! Table state types.

use core::fmt;

/// Phase of the hand.
///
/// Within a hand the state only moves forward:
/// `Open -> PreFlop -> Flop -> Turn -> River -> Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TableState {
    /// Waiting for players to join.
    Open,
    /// Hole cards dealt, first betting round.
    PreFlop,
    /// Three community cards shown.
    Flop,
    /// Fourth community card shown.
    Turn,
    /// Fifth community card shown.
    River,
    /// Hand is over and the pot has been awarded.
    Ended,
}

impl TableState {
    /// Returns whether a betting round is in progress.
    #[must_use]
    pub const fn is_betting(self) -> bool {
        matches!(self, Self::PreFlop | Self::Flop | Self::Turn | Self::River)
    }

    /// Returns the state that follows a completed betting round, together
    /// with the number of community cards to draw on entering it.
    ///
    /// Returns `None` outside a betting round.
    #[must_use]
    pub const fn next_street(self) -> Option<(Self, usize)> {
        match self {
            Self::PreFlop => Some((Self::Flop, 3)),
            Self::Flop => Some((Self::Turn, 1)),
            Self::Turn => Some((Self::River, 1)),
            Self::River => Some((Self::Ended, 0)),
            Self::Open | Self::Ended => None,
        }
    }
}

impl fmt::Display for TableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "OPEN",
            Self::PreFlop => "PRE_FLOP",
            Self::Flop => "FLOP",
            Self::Turn => "TURN",
            Self::River => "RIVER",
            Self::Ended => "ENDED",
        };
        f.write_str(name)
    }
}

/// A betting action submitted for the current player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Commit `amount` more chips, above the highest bet.
    Raise {
        /// Chips to commit.
        amount: usize,
    },
    /// Match the highest bet of the round.
    Call,
    /// Pass without betting.
    Check,
}
