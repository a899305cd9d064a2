use crate::controllers::interactive::errors::rules_engine::RulesEngineError;
use crate::core::data::board_snapshot::BoardSnapshot;
use crate::core::data::candidate_move::CandidateMove;

/// The rules engine as seen by the interaction controller.
///
/// The engine owns board state, legality and history. Move equality is the structural equality of
/// [`CandidateMove`], so `valid_moves` must build its entries with [`CandidateMove::new`] against
/// the same board that [`board`](RulesEnginePort::board) returns.
pub trait RulesEnginePort {
    /// Every move legal in the current position.
    fn valid_moves(&self) -> Vec<CandidateMove>;

    /// Applies a move the caller has already found in [`valid_moves`](RulesEnginePort::valid_moves).
    fn make_move(&mut self, candidate: &CandidateMove) -> Result<(), RulesEngineError>;

    /// Reverts the last applied move. Returns `false` and leaves the board untouched when there is
    /// no history.
    fn undo_move(&mut self) -> bool;

    fn board(&self) -> BoardSnapshot;
}
