//! Play session: repeated rounds against the terminal.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::console::{Action, Console};
use crate::deck::Deck;
use crate::error::PlayError;
use crate::game::{Game, GameState};
use crate::options::Options;
use crate::result::RoundResult;

/// A sequence of rounds sharing one random source.
///
/// The random source is seeded exactly once, when the session is created.
/// Every round gets a freshly created and shuffled deck; nothing else
/// carries over between rounds.
#[derive(Debug, Clone)]
pub struct Session {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Session {
    /// Creates a session, drawing a seed if `options` does not fix one.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        log::debug!("session seed {seed}");

        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed this session was started with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Sets up the next round with a fresh shuffled deck.
    pub fn next_game(&mut self) -> Game {
        let deck = Deck::shuffled(&mut self.rng);
        log::debug!("shuffled a fresh deck");
        Game::new(deck)
    }

    /// Plays rounds until the player declines another one.
    ///
    /// Returns the number of rounds played.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails, input ends during a decision,
    /// or a round fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<usize, PlayError> {
        let mut rounds = 0;

        loop {
            let game = self.next_game();
            play_round(game, console)?;
            rounds += 1;

            if !console.prompt_play_again()? {
                break;
            }
        }

        log::info!("session finished after {rounds} round(s)");
        Ok(rounds)
    }
}

/// Plays one round to completion, from the opening deal to the outcome.
///
/// # Errors
///
/// Returns an error if the terminal fails, input ends during a decision, or
/// the deck runs out.
pub fn play_round<R: BufRead, W: Write>(
    mut game: Game,
    console: &mut Console<R, W>,
) -> Result<RoundResult, PlayError> {
    game.deal()?;
    console.clear_screen()?;
    console.show_hands(game.player_hand(), game.dealer_hand())?;

    if game.check_naturals()? {
        console.clear_screen()?;
        console.show_hands(game.player_hand(), game.dealer_hand())?;
        return finish_round(game, console);
    }

    while game.state() == GameState::PlayerTurn {
        match console.prompt_action()? {
            Action::Hit => {
                console.clear_screen()?;
                let card = game.hit()?;
                console.show_drawn(&card)?;
                console.show_hands(game.player_hand(), game.dealer_hand())?;
            }
            Action::Stand => {
                console.clear_screen()?;
                game.stand()?;
            }
        }
    }

    if game.state() == GameState::DealerTurn {
        let drawn = game.dealer_play()?;
        console.show_dealer_turn(game.dealer_hand(), &drawn)?;
        console.show_hands(game.player_hand(), game.dealer_hand())?;
        console.show_scores(game.player_hand().value(), game.dealer_hand().value())?;
    }

    finish_round(game, console)
}

fn finish_round<R: BufRead, W: Write>(
    mut game: Game,
    console: &mut Console<R, W>,
) -> Result<RoundResult, PlayError> {
    let result = game.resolve()?;
    console.show_outcome(result.outcome)?;
    Ok(result)
}
