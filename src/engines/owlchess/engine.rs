use owlchess::{Board, Move, MoveChain, movegen::legal};
use tracing::debug;

use crate::controllers::interactive::errors::rules_engine::RulesEngineError;
use crate::controllers::interactive::ports::rules_engine::RulesEnginePort;
use crate::core::data::board_snapshot::BoardSnapshot;
use crate::core::data::candidate_move::CandidateMove;
use crate::engines::owlchess::convert::{coord_to_square, snapshot};

/// [`RulesEnginePort`] over an owlchess [`MoveChain`], which keeps the board and the undo history.
pub struct OwlchessEngine {
    chain: MoveChain,
}

impl OwlchessEngine {
    #[must_use]
    pub fn initial() -> Self {
        Self {
            chain: MoveChain::new_initial(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesEngineError> {
        let board = Board::from_fen(fen).map_err(|err| RulesEngineError::InvalidPosition {
            fen: fen.to_string(),
            reason: err.to_string(),
        })?;

        Ok(Self {
            chain: MoveChain::new(board),
        })
    }

    /// Legal engine moves paired with their candidate form.
    ///
    /// Promotions yield one engine move per promoted piece for the same pair of squares; they
    /// collapse to a single candidate here, resolved to the queen promotion.
    fn legal_pairs(&self) -> Vec<(CandidateMove, Move)> {
        let board = self.chain.last();
        let snapshot = snapshot(board);
        let mut pairs: Vec<(CandidateMove, Move)> = Vec::new();

        for mv in legal::gen_all(board).iter() {
            let (Ok(origin), Ok(destination)) = (coord_to_square(mv.src()), coord_to_square(mv.dst())) else {
                continue;
            };
            let candidate = CandidateMove::new(origin, destination, &snapshot);

            match pairs.iter_mut().find(|(existing, _)| *existing == candidate) {
                Some(entry) if mv.kind().promote() == Some(owlchess::Piece::Queen) => entry.1 = *mv,
                Some(_) => {}
                None => pairs.push((candidate, *mv)),
            }
        }

        pairs
    }
}

impl Default for OwlchessEngine {
    fn default() -> Self {
        Self::initial()
    }
}

impl RulesEnginePort for OwlchessEngine {
    fn valid_moves(&self) -> Vec<CandidateMove> {
        self.legal_pairs()
            .into_iter()
            .map(|(candidate, _)| candidate)
            .collect()
    }

    fn make_move(&mut self, candidate: &CandidateMove) -> Result<(), RulesEngineError> {
        let mv = self
            .legal_pairs()
            .into_iter()
            .find(|(legal, _)| legal == candidate)
            .map(|(_, mv)| mv)
            .ok_or(RulesEngineError::NoMatchingMove(*candidate))?;

        self.chain
            .push(mv)
            .map_err(|err| RulesEngineError::Refused {
                candidate: *candidate,
                reason: err.to_string(),
            })?;

        debug!(uci = %mv, "engine applied move");

        Ok(())
    }

    fn undo_move(&mut self) -> bool {
        self.chain.pop().is_some()
    }

    fn board(&self) -> BoardSnapshot {
        snapshot(self.chain.last())
    }
}
