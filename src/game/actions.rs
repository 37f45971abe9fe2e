use crate::error::ActionError;

use super::{Action, Table};

impl Table {
    fn ensure_betting(&self) -> Result<usize, ActionError> {
        if !self.state.is_betting() {
            return Err(ActionError::InvalidState);
        }
        self.current_player_index.ok_or(ActionError::InvalidState)
    }

    /// Performs `action` on behalf of the player whose turn it is.
    ///
    /// After the action the turn passes to the next active player. When the
    /// betting round is complete its chips are swept into the pot and the
    /// hand moves to the next street, or to the showdown after the river. If
    /// every other player has folded the hand ends at once.
    ///
    /// # Errors
    ///
    /// Returns an error if no betting round is in progress, or the action is
    /// not legal at this point of the round (call before a raise, check after
    /// a bet, raise amount out of bounds). A rejected action leaves the table
    /// untouched.
    pub fn perform_action(&mut self, action: Action) -> Result<(), ActionError> {
        let index = self.ensure_betting()?;

        match action {
            Action::Fold => self.fold(index),
            Action::Raise { amount } => self.raise(index, amount)?,
            Action::Call => self.call(index)?,
            Action::Check => self.check(index)?,
        }

        if self.active_count() == 1 {
            self.award_uncontested();
            return Ok(());
        }

        self.advance_turn(index);

        // `start` guarantees the deck covers the full board, so settling
        // cannot fail once the action has been applied.
        if self.round_complete() {
            self.settle_round()?;
        }

        Ok(())
    }

    /// Performs `action` for `player_id`, checking that it is their turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not seated, it is not their turn, or
    /// [`perform_action`](Self::perform_action) rejects the action.
    pub fn act(&mut self, player_id: &str, action: Action) -> Result<(), ActionError> {
        let index = self.ensure_betting()?;

        if self.player(player_id).is_none() {
            return Err(ActionError::PlayerNotFound);
        }
        if self.players[index].id() != player_id {
            return Err(ActionError::NotYourTurn);
        }

        self.perform_action(action)
    }

    fn fold(&mut self, index: usize) {
        let player = &mut self.players[index];
        player.set_active(false);
        log::trace!("{} folds", player.id());
    }

    /// Moves the turn to the next active seat after `from`, wrapping around.
    ///
    /// Passing the dealer seat marks that everyone has acted this round.
    fn advance_turn(&mut self, from: usize) {
        // A fold-out ends the hand while one player is still active.
        debug_assert!(self.active_count() > 0, "no active players");
        if self.active_count() == 0 {
            return;
        }

        let seats = self.players.len();
        let mut index = from;
        loop {
            index = (index + 1) % seats;
            if index == self.start_player_index {
                self.all_acted = true;
            }
            if self.players[index].is_active() {
                break;
            }
        }

        self.current_player_index = Some(index);
        log::debug!("turn passes to {}", self.players[index].id());
    }

    fn round_complete(&self) -> bool {
        if self.active_count() <= 1 {
            return true;
        }
        self.all_acted && self.ledger.is_level(self.active_ids())
    }

    /// First active seat at or after the dealer seat.
    pub(super) fn first_to_act(&self) -> Option<usize> {
        let seats = self.players.len();
        (0..seats)
            .map(|offset| (self.start_player_index + offset) % seats)
            .find(|&index| self.players[index].is_active())
    }
}
