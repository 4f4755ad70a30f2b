//! Round engine and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EmptyDeck;
use crate::hand::{DealerHand, Hand};
use crate::result::Outcome;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::GameState;

/// Value at or above which the dealer stops drawing.
pub const DEALER_STANDS_ON: u16 = 17;

/// A single round of blackjack between the player and the dealer.
///
/// The game owns the deck and both hands for the lifetime of the round.
/// Each phase is driven by one method, and calling a method out of turn
/// returns an `InvalidState` error without touching the cards.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to deal.
    deck: Deck,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Current round state.
    state: GameState,
    /// Outcome decided before the showdown comparison, if any.
    outcome: Option<Outcome>,
}

impl Game {
    /// Creates a round that will deal from `deck`.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{Deck, Game, GameState};
    ///
    /// let game = Game::new(Deck::shuffled_with_seed(42));
    /// assert_eq!(game.state(), GameState::DealingInitial);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: DealerHand::new(),
            state: GameState::DealingInitial,
            outcome: None,
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, EmptyDeck> {
        self.deck.deal_one()
    }

    /// Ends the round early with a known outcome.
    fn finish(&mut self, outcome: Outcome) {
        self.dealer.reveal_hole();
        self.outcome = Some(outcome);
        self.state = GameState::Resolution;
        log::debug!("round decided early: {outcome:?}");
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
