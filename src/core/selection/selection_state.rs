use crate::core::data::square::Square;

/// Two-click move selection.
///
/// `Idle` is both the initial state and the state every move cycle returns to. `Armed` holds the
/// first click of a move in progress.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Armed { origin: Square },
}

/// What a click did to the selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickTransition {
    /// First click of a move: `Idle -> Armed`.
    Armed(Square),
    /// The armed square was clicked again: `Armed -> Idle`.
    Deselected(Square),
    /// Second click on a different square. The selection is already back to `Idle`; the caller
    /// resolves the pair.
    Resolve { origin: Square, destination: Square },
}

impl SelectionState {
    pub fn click(&mut self, square: Square) -> ClickTransition {
        match *self {
            Self::Idle => {
                *self = Self::Armed { origin: square };
                ClickTransition::Armed(square)
            }
            Self::Armed { origin } if origin == square => {
                *self = Self::Idle;
                ClickTransition::Deselected(square)
            }
            Self::Armed { origin } => {
                *self = Self::Idle;
                ClickTransition::Resolve {
                    origin,
                    destination: square,
                }
            }
        }
    }

    #[must_use]
    pub fn selected_square(&self) -> Option<Square> {
        match self {
            Self::Idle => None,
            Self::Armed { origin } => Some(*origin),
        }
    }

    /// Clicks collected toward the current move. Never longer than one between events.
    #[must_use]
    pub fn pending_clicks(&self) -> Vec<Square> {
        self.selected_square().into_iter().collect()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(row: i64, col: i64) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn first_click_arms_selection() {
        let mut state = SelectionState::default();

        let transition = state.click(square(6, 4));

        assert_eq!(transition, ClickTransition::Armed(square(6, 4)));
        assert_eq!(state.selected_square(), Some(square(6, 4)));
        assert_eq!(state.pending_clicks(), vec![square(6, 4)]);
    }

    #[test]
    fn same_square_twice_deselects() {
        let mut state = SelectionState::default();
        state.click(square(6, 4));

        let transition = state.click(square(6, 4));

        assert_eq!(transition, ClickTransition::Deselected(square(6, 4)));
        assert!(state.is_idle());
        assert!(state.pending_clicks().is_empty());
    }

    #[test]
    fn second_distinct_click_resolves_and_returns_to_idle() {
        let mut state = SelectionState::default();
        state.click(square(6, 4));

        let transition = state.click(square(4, 4));

        assert_eq!(
            transition,
            ClickTransition::Resolve {
                origin: square(6, 4),
                destination: square(4, 4)
            }
        );
        assert_eq!(state, SelectionState::Idle);
    }

    #[test]
    fn repeated_clicks_on_one_square_alternate() {
        let mut state = SelectionState::default();
        let a = square(3, 3);

        for click in 1..=4 {
            state.click(a);
            if click % 2 == 0 {
                assert!(state.is_idle(), "click {} should leave selection empty", click);
            } else {
                assert_eq!(state.selected_square(), Some(a));
            }
        }
    }

    #[test]
    fn pending_clicks_length_matches_selected_square() {
        let mut state = SelectionState::default();
        let squares = [square(0, 0), square(0, 0), square(1, 1), square(2, 2), square(5, 5)];

        for sq in squares {
            state.click(sq);
            assert_eq!(state.pending_clicks().len() == 1, state.selected_square().is_some());
            assert!(state.pending_clicks().len() <= 1);
        }
    }
}
