//! Terminal presentation and keyboard input.
//!
//! [`Console`] writes the table to any [`Write`] and reads decisions from
//! any [`BufRead`], so a session can run against stdin/stdout or against
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::card::Card;
use crate::error::{InputError, PlayError};
use crate::hand::{DealerHand, Hand};
use crate::options::DEFAULT_CLEAR_LINES;
use crate::result::Outcome;

/// Line printed at the end of every round.
pub const SEPARATOR: &str = "-------------------------";

const RULE: &str = "==========";

/// A decision on the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl TryFrom<char> for Action {
    type Error = InputError;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        match key.to_ascii_lowercase() {
            'h' => Ok(Self::Hit),
            's' => Ok(Self::Stand),
            _ => Err(InputError::InvalidInput(key)),
        }
    }
}

/// Renders the table and reads single-key answers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_lines: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given input and output.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_lines: DEFAULT_CLEAR_LINES,
        }
    }

    /// Sets how many blank lines [`Console::clear_screen`] emits.
    #[must_use]
    pub fn with_clear_lines(mut self, lines: usize) -> Self {
        self.clear_lines = lines;
        self
    }

    /// Consumes the console, returning its input and output.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Scrolls the previous phase out of view.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        for _ in 0..self.clear_lines {
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Prints both hands. The dealer's hole card is shown as `Hidden Card`
    /// until it has been revealed.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn show_hands(&mut self, player: &Hand, dealer: &DealerHand) -> io::Result<()> {
        writeln!(self.output, "Your hand:")?;
        self.print_cards(player.cards())?;
        writeln!(self.output)?;

        writeln!(self.output, "Dealer's hand:")?;
        if dealer.is_hole_revealed() {
            self.print_cards(dealer.cards())?;
        } else {
            writeln!(self.output, "Hidden Card")?;
            if let Some(card) = dealer.up_card() {
                writeln!(self.output, "{card}")?;
            }
        }
        writeln!(self.output)
    }

    /// Prints the card the player just drew.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn show_drawn(&mut self, card: &Card) -> io::Result<()> {
        writeln!(self.output, "You drew:")?;
        writeln!(self.output, "{card}")?;
        writeln!(self.output, "{RULE}")
    }

    /// Prints the dealer revealing the hole card and any cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn show_dealer_turn(&mut self, dealer: &DealerHand, drawn: &[Card]) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Dealer's turn:")?;
        writeln!(self.output, "{RULE}")?;
        if let Some(card) = dealer.hole_card() {
            writeln!(self.output, "Dealer's hidden card: {card}")?;
        }
        if !drawn.is_empty() {
            writeln!(self.output, "Dealer drew:")?;
            self.print_cards(drawn)?;
        }
        writeln!(self.output, "{SEPARATOR}")
    }

    /// Prints both final scores.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn show_scores(&mut self, player_value: u16, dealer_value: u16) -> io::Result<()> {
        writeln!(self.output, "Your score: {player_value}")?;
        writeln!(self.output, "Dealer's score: {dealer_value}")
    }

    /// Prints the round's outcome and closes the round.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn show_outcome(&mut self, outcome: Outcome) -> io::Result<()> {
        writeln!(self.output, "{}", outcome.message())?;
        writeln!(self.output, "{SEPARATOR}")
    }

    /// Asks for hit or stand until a valid key is entered.
    ///
    /// Each answer is one line, and only its first non-whitespace character
    /// counts: `hs` is a single hit and the `s` is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InputClosed`] if input ends first, or
    /// [`PlayError::Io`] if the terminal fails.
    pub fn prompt_action(&mut self) -> Result<Action, PlayError> {
        loop {
            self.prompt("Enter 'h' to hit or 's' to stand: ")?;
            let Some(key) = self.read_key()? else {
                return Err(PlayError::InputClosed);
            };

            match Action::try_from(key) {
                Ok(action) => return Ok(action),
                Err(err) => {
                    log::debug!("{err}");
                    writeln!(self.output, "Invalid input. Please enter 'h' or 's'.")?;
                }
            }
        }
    }

    /// Asks whether to play another round. Only `y` or `Y` means yes, and
    /// end of input means no.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn prompt_play_again(&mut self) -> io::Result<bool> {
        self.prompt("Do you want to play again? (y/n): ")?;
        Ok(self
            .read_key()?
            .is_some_and(|key| key.eq_ignore_ascii_case(&'y')))
    }

    fn print_cards(&mut self, cards: &[Card]) -> io::Result<()> {
        for card in cards {
            writeln!(self.output, "{card}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Reads the first non-whitespace character of the next non-blank line.
    ///
    /// Bytes that are not valid UTF-8 decode to `U+FFFD`, which no prompt
    /// accepts.
    fn read_key(&mut self) -> io::Result<Option<char>> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            if let Some(key) = String::from_utf8_lossy(&line).trim().chars().next() {
                return Ok(Some(key));
            }
        }
    }
}
