//! A single-table Texas Hold'em engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that runs a hand from the deal through
//! the betting rounds to the showdown, and a [`Session`] that shares one table
//! between callers behind a lock.
//!
//! # Example
//!
//! ```
//! use holdem::{Action, Table, TableOptions, TableState};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! table.add_player("al-capone", "Al Capone").unwrap();
//! table.add_player("pat-garrett", "Pat Garrett").unwrap();
//! table.start().unwrap();
//!
//! table.perform_action(Action::Check).unwrap();
//! table.perform_action(Action::Check).unwrap();
//! assert_eq!(table.state(), TableState::Flop);
//! assert_eq!(table.community_cards().len(), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod session;
mod sync;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, DrawError, IllegalAction, JoinError, ResetError, ShowdownError, StartError,
};
pub use game::{Action, BetLedger, Table, TableState};
pub use hand::{BestHand, Contender, HandCategory, HandRank, best_hand, determine, evaluate_five};
pub use options::{DEFAULT_STARTING_CASH, MIN_PLAYERS, TableOptions};
pub use player::Player;
pub use result::{HandResult, Payout};
pub use session::Session;
pub use view::{BetView, PlayerView, TableView};
