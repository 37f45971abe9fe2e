//! A table shared between request handlers.

use alloc::string::String;

use crate::error::{ActionError, JoinError, ResetError, StartError};
use crate::game::{Action, Table};
use crate::options::TableOptions;
use crate::sync::Mutex;
use crate::view::TableView;

/// One table behind an exclusive lock.
///
/// Every call locks the table for its whole duration, so concurrent requests
/// for the same table are applied one after another. Create one session per
/// table; sessions share nothing.
pub struct Session {
    table: Mutex<Table>,
}

impl Session {
    /// Creates a session around a new table.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::from_table(Table::new(options, seed))
    }

    /// Creates a session around an existing table.
    #[must_use]
    pub const fn from_table(table: Table) -> Self {
        Self {
            table: Mutex::new(table),
        }
    }

    /// Seats a player.
    ///
    /// # Errors
    ///
    /// See [`Table::add_player`].
    pub fn join(&self, id: impl Into<String>, name: impl Into<String>) -> Result<(), JoinError> {
        self.table.lock().add_player(id, name)
    }

    /// Deals a new hand.
    ///
    /// # Errors
    ///
    /// See [`Table::start`].
    pub fn start(&self) -> Result<(), StartError> {
        self.table.lock().start()
    }

    /// Applies an action submitted by `player_id`.
    ///
    /// # Errors
    ///
    /// See [`Table::act`].
    pub fn submit(&self, player_id: &str, action: Action) -> Result<(), ActionError> {
        self.table.lock().act(player_id, action)
    }

    /// Prepares the table for another hand.
    ///
    /// # Errors
    ///
    /// See [`Table::reset_hand`].
    pub fn reset_hand(&self) -> Result<(), ResetError> {
        self.table.lock().reset_hand()
    }

    /// Returns the table as seen by `viewer`.
    pub fn view(&self, viewer: Option<&str>) -> TableView {
        self.table.lock().view(viewer)
    }

    /// Runs `f` with exclusive access to the table.
    pub fn with<R>(&self, f: impl FnOnce(&mut Table) -> R) -> R {
        f(&mut self.table.lock())
    }

    /// Consumes the session and returns the table.
    #[must_use]
    pub fn into_table(self) -> Table {
        self.table.into_inner()
    }
}
