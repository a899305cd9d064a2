use std::fmt;
use crate::core::data::candidate_move::CandidateMove;
use crate::core::data::square::Square;

/// What the controller did with one input event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Pointer-down outside the board; nothing changed.
    Ignored,
    Selected(Square),
    Deselected(Square),
    MoveApplied(CandidateMove),
    /// The candidate was not in the legal-move set and was discarded.
    MoveRejected(CandidateMove),
    Undone,
    Quit,
}

impl InteractionOutcome {
    /// Whether the engine's board may have changed.
    #[must_use]
    pub fn mutated_board(&self) -> bool {
        matches!(self, Self::MoveApplied(_) | Self::Undone)
    }
}

impl fmt::Display for InteractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignored => write!(f, "ignored"),
            Self::Selected(square) => write!(f, "selected {}", square),
            Self::Deselected(square) => write!(f, "deselected {}", square),
            Self::MoveApplied(candidate) => write!(f, "moved {}", candidate),
            Self::MoveRejected(candidate) => write!(f, "rejected {}", candidate),
            Self::Undone => write!(f, "undo"),
            Self::Quit => write!(f, "quit"),
        }
    }
}
