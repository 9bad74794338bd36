pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! Display text and limits shared by the panels and the UI loop.

    // =============================================================================
    // ACTIVITY LOG
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // DISPLAY
    // =============================================================================

    /// Shown in place of a value that cannot be formatted.
    pub const MISSING_VALUE: &str = "—";

    /// Currency symbol prefixed to every amount.
    pub const CURRENCY_SYMBOL: &str = "$";

    /// Goal category chips offered by the goals panel, in display order.
    /// "All" is implicit and always comes first.
    pub const GOAL_CATEGORIES: [&str; 3] = ["Savings", "Travel", "Transportation"];

    /// Shown when a goal filter matches nothing.
    pub const EMPTY_GOALS_TEXT: &str = "No goals in this category";

    /// Shown by the insights panel while the caller reports loading.
    pub const LOADING_INSIGHTS_TEXT: &str = "Loading insights...";

    /// Placeholder body of the income streams section.
    pub const INCOME_PLACEHOLDER_TEXT: &str = "Income streams tracking coming soon";

    // =============================================================================
    // UI LOOP
    // =============================================================================

    /// How long the splash screen stays up before the dashboard opens (seconds).
    pub const SPLASH_DURATION_SECS: u64 = 2;

    /// Input poll timeout per frame (milliseconds).
    pub const INPUT_POLL_MS: u64 = 100;
}
