use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching exactly 21 wins the round on the spot and going over 21
    /// loses it; in both cases the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_card(card);

        let value = self.player.value();
        log::debug!("player drew {card}, hand value {value}");

        if self.player.is_bust() {
            self.finish(Outcome::Bust);
        } else if value == 21 {
            self.finish(Outcome::Win);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        log::debug!("player stands on {}", self.player.value());
        self.state = GameState::DealerTurn;

        Ok(())
    }
}
