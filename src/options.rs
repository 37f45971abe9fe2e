//! Table configuration options.

/// Chips each player receives on joining, unless configured otherwise.
pub const DEFAULT_STARTING_CASH: usize = 100;

/// Minimum number of seated players needed to start a hand.
pub const MIN_PLAYERS: usize = 2;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use holdem::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_cash(500)
///     .with_max_players(6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Chips given to a player on joining.
    pub starting_cash: usize,
    /// Maximum number of seated players.
    pub max_players: usize,
    /// Whether each new hand is dealt from a freshly shuffled deck.
    ///
    /// When disabled the table keeps dealing from the deck it was created
    /// with until it runs out.
    pub fresh_deck_per_hand: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_cash: DEFAULT_STARTING_CASH,
            max_players: 10,
            fresh_deck_per_hand: true,
        }
    }
}

impl TableOptions {
    /// Sets the starting stack.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_cash(250);
    /// assert_eq!(options.starting_cash, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_cash(mut self, cash: usize) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Sets the maximum number of seated players.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_players(4);
    /// assert_eq!(options.max_players, 4);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets whether every hand gets a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem::TableOptions;
    ///
    /// let options = TableOptions::default().with_fresh_deck_per_hand(false);
    /// assert!(!options.fresh_deck_per_hand);
    /// ```
    #[must_use]
    pub const fn with_fresh_deck_per_hand(mut self, fresh: bool) -> Self {
        self.fresh_deck_per_hand = fresh;
        self
    }
}
