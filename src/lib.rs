//! A single-player console blackjack game.
//!
//! The crate provides a [`Game`] type that runs one round as a state
//! machine (opening deal, naturals, player turn, dealer turn, resolution),
//! a [`Console`] that renders it to a terminal, and a [`Session`] that
//! repeats rounds while the player wants to continue.
//!
//! # Example
//!
//! ```
//! use blackjack::{Deck, Game};
//!
//! let mut game = Game::new(Deck::shuffled_with_seed(42));
//! game.deal().unwrap();
//! assert_eq!(game.player_hand().len(), 2);
//! assert_eq!(game.dealer_hand().len(), 2);
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::{Action, Console};
pub use deck::Deck;
pub use error::{ActionError, DealError, EmptyDeck, InputError, PlayError, ShowdownError};
pub use game::{DEALER_STANDS_ON, Game, GameState};
pub use hand::{DealerHand, Hand, hand_value};
pub use options::Options;
pub use result::{Outcome, RoundResult, settle};
pub use session::{Session, play_round};
