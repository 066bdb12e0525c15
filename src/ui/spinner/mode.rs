//! Visual modes of the dash spinner

/// The visual states a dash spinner moves through during one cycle
///
/// A cycle only ever moves forward: `Download` into the two transition
/// modes, then into one of the terminal modes. A reset starts a fresh
/// cycle from `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerMode {
    /// Idle, nothing drawn in the center yet
    #[default]
    None,
    /// Progress is being reported; inner circle grows, arc spins
    Download,
    /// Stage A: progress text collapses to a dot while the circle completes
    TransitionTextAndCircle,
    /// Stage B: the dot stretches into a horizontal line
    TransitionLine,
    /// Terminal: the line folds into a tick mark
    Success,
    /// Terminal: the line splits into a cross
    Failure,
    /// Terminal: the line rotates into an exclamation mark
    Unknown,
}

impl SpinnerMode {
    /// End state of a cycle (tick, cross, or exclamation)
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failure | Self::Unknown)
    }

    /// One of the two chained intermediate animations
    pub fn is_transitional(self) -> bool {
        matches!(self, Self::TransitionTextAndCircle | Self::TransitionLine)
    }

    /// Modes in which `set_progress` is accepted
    pub fn accepts_progress(self) -> bool {
        matches!(self, Self::None | Self::Download)
    }
}
