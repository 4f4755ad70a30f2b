//! Round outcome types.

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player was dealt a natural and the dealer was not.
    Blackjack,
    /// Dealer was dealt a natural and the player was not.
    DealerBlackjack,
    /// Player went over 21.
    Bust,
    /// Player wins (hit to 21, dealer busts, or higher value).
    Win,
    /// Dealer wins on value.
    Lose,
    /// Equal values, including two naturals.
    Draw,
}

impl Outcome {
    /// The line shown to the player when the round ends.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Blackjack => "Blackjack! You win!",
            Self::DealerBlackjack => "Dealer has Blackjack! Dealer wins!",
            Self::Bust => "Busted! You lose.",
            Self::Win => "You win!",
            Self::Lose => "Dealer wins!",
            Self::Draw => "It's a draw!",
        }
    }
}

/// Compares final values once both sides have finished drawing.
///
/// Rules apply in order: player bust loses, dealer bust wins, then the
/// higher value wins and equal values draw.
#[must_use]
pub const fn settle(player_value: u16, dealer_value: u16) -> Outcome {
    if player_value > 21 {
        Outcome::Bust
    } else if dealer_value > 21 || player_value > dealer_value {
        Outcome::Win
    } else if dealer_value > player_value {
        Outcome::Lose
    } else {
        Outcome::Draw
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value.
    pub dealer_value: u16,
    /// Whether the dealer played out their hand.
    pub dealer_played: bool,
}
