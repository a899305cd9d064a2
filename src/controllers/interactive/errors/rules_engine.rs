use thiserror::Error;
use crate::core::data::candidate_move::CandidateMove;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesEngineError {
    #[error("invalid starting position `{fen}`: {reason}")]
    InvalidPosition { fen: String, reason: String },
    #[error("no legal engine move matches candidate {0}")]
    NoMatchingMove(CandidateMove),
    #[error("engine refused move {candidate}: {reason}")]
    Refused {
        candidate: CandidateMove,
        reason: String,
    },
}
