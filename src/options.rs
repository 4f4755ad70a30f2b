//! Session configuration options.

/// Number of blank lines printed to clear the screen by default.
pub const DEFAULT_CLEAR_LINES: usize = 50;

/// Configuration options for a play session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack::Options;
///
/// let options = Options::default()
///     .with_seed(Some(7))
///     .with_clear_lines(0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Seed for the session's random source.
    /// `None` draws a seed once when the session starts.
    pub seed: Option<u64>,
    /// Blank lines emitted to clear the screen between phases.
    /// 0 to disable clearing.
    pub clear_lines: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: None,
            clear_lines: DEFAULT_CLEAR_LINES,
        }
    }
}

impl Options {
    /// Sets the random seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::Options;
    ///
    /// let options = Options::default().with_seed(Some(42));
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets how many blank lines clear the screen.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::Options;
    ///
    /// let options = Options::default().with_clear_lines(0);
    /// assert_eq!(options.clear_lines, 0);
    /// ```
    #[must_use]
    pub const fn with_clear_lines(mut self, lines: usize) -> Self {
        self.clear_lines = lines;
        self
    }
}
