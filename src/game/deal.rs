use crate::error::DealError;
use crate::result::Outcome;

use super::{Game, GameState};

impl Game {
    /// Deals the opening hands: two cards each, alternating, player first.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt or the deck runs
    /// out.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::DealingInitial {
            return Err(DealError::InvalidState);
        }

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);

            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        log::debug!(
            "dealt opening hands, {} cards left in the deck",
            self.deck.len()
        );
        self.state = GameState::CheckingNaturals;

        Ok(())
    }

    /// Checks both opening hands for a natural 21.
    ///
    /// Returns `true` if a natural ended the round, in which case the game
    /// moves straight to [`GameState::Resolution`]. Otherwise the player's
    /// turn begins.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening hands have not just been dealt.
    pub fn check_naturals(&mut self) -> Result<bool, DealError> {
        if self.state != GameState::CheckingNaturals {
            return Err(DealError::InvalidState);
        }

        let outcome = match (self.player.is_blackjack(), self.dealer.is_blackjack()) {
            (true, true) => Outcome::Draw,
            (true, false) => Outcome::Blackjack,
            (false, true) => Outcome::DealerBlackjack,
            (false, false) => {
                self.state = GameState::PlayerTurn;
                return Ok(false);
            }
        };

        self.finish(outcome);
        Ok(true)
    }
}
