use crate::controllers::interactive::InteractionOutcome;
use crate::core::data::board_view::BoardView;

/// Text rows for the status window.
#[must_use]
pub fn status_lines(
    view: &BoardView,
    legal_moves: usize,
    last_outcome: Option<InteractionOutcome>,
) -> Vec<String> {
    let selection = match view.selected {
        Some(square) => square.to_string(),
        None => "none".to_string(),
    };

    let last = match last_outcome {
        Some(outcome) => outcome.to_string(),
        None => "-".to_string(),
    };

    vec![
        format!("To move: {}", view.board.side_to_move().display_name()),
        format!("Selected: {}", selection),
        format!("Legal moves: {}", legal_moves),
        format!("Last: {}", last),
    ]
}
