//! Error types for game operations.

use std::io;

use thiserror::Error;

/// The deck has no cards left to deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeck;

/// Errors that can occur while dealing the opening hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck ran out mid-deal.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<EmptyDeck> for DealError {
    fn from(_: EmptyDeck) -> Self {
        Self::EmptyDeck
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<EmptyDeck> for ActionError {
    fn from(_: EmptyDeck) -> Self {
        Self::EmptyDeck
    }
}

/// Errors that can occur during dealer play and resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<EmptyDeck> for ShowdownError {
    fn from(_: EmptyDeck) -> Self {
        Self::EmptyDeck
    }
}

/// A keystroke that is not a valid decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The key is neither hit nor stand.
    #[error("invalid input {0:?}, expected 'h' or 's'")]
    InvalidInput(char),
}

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum PlayError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    /// Input ended while a hit/stand decision was pending.
    #[error("input closed before a decision was made")]
    InputClosed,
    /// Dealing the opening hands failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer play or resolution failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
