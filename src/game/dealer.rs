use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{ActionError, DrawError, StartError};
use crate::hand::{self, BOARD_CARDS, Contender, HOLE_CARDS};
use crate::options::MIN_PLAYERS;
use crate::result::{HandResult, Payout, split_pot};

use super::{Table, TableState};

impl Table {
    /// Deals a new hand and opens the pre-flop betting round.
    ///
    /// Every player is dealt two hole cards, one at a time in join order, and
    /// marked active. The dealer seat acts first and every ledger entry starts
    /// at zero. No community cards are drawn yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not open, fewer than two players are
    /// seated, or the deck cannot cover the hole cards and the full board.
    pub fn start(&mut self) -> Result<(), StartError> {
        if self.state != TableState::Open {
            return Err(StartError::InvalidState);
        }

        let count = self.players.len();
        if count < MIN_PLAYERS {
            return Err(StartError::InsufficientPlayers { count });
        }

        let needed = count * HOLE_CARDS + BOARD_CARDS;
        if self.deck.remaining() < needed {
            return Err(DrawError::InsufficientCards {
                requested: needed,
                remaining: self.deck.remaining(),
            }
            .into());
        }

        for player in &mut self.players {
            player.clear_cards();
            for _ in 0..HOLE_CARDS {
                let card = self.deck.draw_one()?;
                player.add_card(card);
            }
            player.set_active(true);
        }

        self.ledger.open(self.players.iter().map(crate::Player::id));
        self.pot = 0;
        self.community_cards.clear();
        self.result = None;
        self.all_acted = false;
        self.current_player_index = Some(self.start_player_index);
        self.state = TableState::PreFlop;

        log::info!("hand started with {count} players");
        Ok(())
    }

    /// Sweeps the round into the pot and moves to the next street.
    ///
    /// The board cards are drawn and the showdown is evaluated before
    /// anything is changed, so a failure leaves the table as it was.
    pub(super) fn settle_round(&mut self) -> Result<(), ActionError> {
        let Some((next, draw)) = self.state.next_street() else {
            return Err(ActionError::InvalidState);
        };

        let winners = if next == TableState::Ended {
            Some(self.showdown_winners()?)
        } else {
            None
        };
        let cards = self.deck.draw(draw)?;

        self.pot += self.ledger.total();
        self.community_cards.extend(cards);
        self.ledger.reset();
        self.all_acted = false;

        log::info!(
            "{} -> {next}, pot {}, board {}",
            self.state,
            self.pot,
            self.community_cards.len()
        );

        match winners {
            Some(winners) => self.pay_winners(winners),
            None => {
                self.state = next;
                self.current_player_index = self.first_to_act();
            }
        }

        Ok(())
    }

    /// Compares the hands still in play.
    ///
    /// Winners come back in seat order from the dealer seat, which is the
    /// order odd chips are handed out in.
    fn showdown_winners(&self) -> Result<Vec<hand::BestHand>, ActionError> {
        let contenders: Vec<Contender<'_>> = self
            .players
            .iter()
            .filter(|p| p.is_active())
            .map(|p| Contender {
                player_id: p.id(),
                hole_cards: p.cards(),
            })
            .collect();

        let winners = hand::determine(&contenders, &self.community_cards)?;

        let seats = self.players.len();
        let mut seated_winners: Vec<(usize, hand::BestHand)> = winners
            .into_iter()
            .filter_map(|best| {
                let seat = self.players.iter().position(|p| p.id() == best.player_id)?;
                Some(((seat + seats - self.start_player_index) % seats, best))
            })
            .collect();
        seated_winners.sort_by_key(|(order, _)| *order);

        Ok(seated_winners.into_iter().map(|(_, best)| best).collect())
    }

    fn pay_winners(&mut self, winners: Vec<hand::BestHand>) {
        let shares = split_pot(self.pot, winners.len());
        let mut payouts = Vec::with_capacity(winners.len());
        for (best, amount) in winners.into_iter().zip(shares) {
            if let Some(player) = self.player_mut(&best.player_id) {
                player.add_cash(amount);
            }
            log::info!(
                "{} wins {amount} with {}",
                best.player_id,
                best.rank.category()
            );
            payouts.push(Payout {
                player_id: best.player_id,
                hand: best.cards.to_vec(),
                category: Some(best.rank.category()),
                amount,
            });
        }

        self.finish(HandResult {
            pot: self.pot,
            payouts,
            uncontested: false,
        });
    }

    /// Ends the hand in favour of the only player who has not folded.
    pub(super) fn award_uncontested(&mut self) {
        self.pot += self.ledger.total();
        self.ledger.reset();

        let pot = self.pot;
        let Some(winner) = self.players.iter_mut().find(|p| p.is_active()) else {
            return;
        };
        winner.add_cash(pot);
        let player_id = String::from(winner.id());
        log::info!("{player_id} wins {pot} uncontested");

        self.finish(HandResult {
            pot,
            payouts: alloc::vec![Payout {
                player_id,
                hand: Vec::new(),
                category: None,
                amount: pot,
            }],
            uncontested: true,
        });
    }

    fn finish(&mut self, result: HandResult) {
        self.result = Some(result);
        self.current_player_index = None;
        self.all_acted = false;
        self.state = TableState::Ended;
    }
}
