//! Game state types.

/// Round state.
///
/// A round moves strictly forward:
/// `DealingInitial -> CheckingNaturals -> PlayerTurn -> DealerTurn -> Resolution -> Done`,
/// with naturals, a player bust, and a player reaching 21 jumping straight
/// to `Resolution`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the opening deal.
    DealingInitial,
    /// Opening hands dealt; naturals not yet checked.
    CheckingNaturals,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be resolved.
    Resolution,
    /// Round resolved.
    Done,
}
