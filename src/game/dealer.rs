use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{RoundResult, settle};

use super::{DEALER_STANDS_ON, Game, GameState};

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher. A soft 17 stands.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.draw()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
            log::debug!("dealer drew {card}, hand value {}", self.dealer.value());
        }

        self.state = GameState::Resolution;

        Ok(drawn_cards)
    }

    /// Determines the winner and finishes the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not reached resolution.
    pub fn resolve(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Resolution {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let dealer_played = self.outcome.is_none();
        let outcome = *self
            .outcome
            .get_or_insert_with(|| settle(player_value, dealer_value));

        self.state = GameState::Done;
        log::info!("round over: {outcome:?} (player {player_value}, dealer {dealer_value})");

        Ok(RoundResult {
            outcome,
            player_value,
            dealer_value,
            dealer_played,
        })
    }
}
