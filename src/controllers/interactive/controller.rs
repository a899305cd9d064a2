use tracing::{debug, error, info};

use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::events::outcome::InteractionOutcome;
use crate::controllers::interactive::ports::rules_engine::RulesEnginePort;
use crate::core::data::board_geometry::BoardGeometry;
use crate::core::data::board_view::BoardView;
use crate::core::data::candidate_move::CandidateMove;
use crate::core::data::point::Point;
use crate::core::data::square::Square;
use crate::core::selection::selection_state::{ClickTransition, SelectionState};

/// Turns pointer clicks and undo requests into rules engine calls.
///
/// The controller caches the engine's legal-move set. Any accepted move or undo marks the cache
/// stale, and it is re-fetched before the next legality check.
pub struct InteractionController<E: RulesEnginePort> {
    engine: E,
    geometry: BoardGeometry,
    selection: SelectionState,
    valid_moves: Vec<CandidateMove>,
    move_made: bool,
}

impl<E: RulesEnginePort> InteractionController<E> {
    pub fn new(engine: E, geometry: BoardGeometry) -> Self {
        let valid_moves = engine.valid_moves();

        Self {
            engine,
            geometry,
            selection: SelectionState::default(),
            valid_moves,
            move_made: false,
        }
    }

    /// Handles one event and refreshes the legal-move cache if the event changed the board.
    pub fn process(&mut self, event: InputEvent) -> InteractionOutcome {
        let outcome = match event {
            InputEvent::PointerDown(point) => self.handle_pointer_down(point),
            InputEvent::UndoRequested => self.handle_undo_requested(),
            InputEvent::Quit => InteractionOutcome::Quit,
        };

        if self.move_made {
            self.post_event_recompute();
        }

        outcome
    }

    pub fn handle_pointer_down(&mut self, point: Point) -> InteractionOutcome {
        let Some(square) = self.geometry.square_at(point) else {
            debug!(x = point.x, y = point.y, "pointer down outside the board, dropped");
            return InteractionOutcome::Ignored;
        };

        match self.selection.click(square) {
            ClickTransition::Armed(square) => {
                debug!(%square, "selected");
                InteractionOutcome::Selected(square)
            }
            ClickTransition::Deselected(square) => {
                debug!(%square, "deselected");
                InteractionOutcome::Deselected(square)
            }
            ClickTransition::Resolve {
                origin,
                destination,
            } => self.resolve(origin, destination),
        }
    }

    /// Asks the engine to undo even when there is nothing to undo; the engine no-ops in that case.
    pub fn handle_undo_requested(&mut self) -> InteractionOutcome {
        let undone = self.engine.undo_move();
        self.move_made = true;

        if undone {
            info!("move undone");
        } else {
            debug!("undo requested with empty history");
        }

        InteractionOutcome::Undone
    }

    /// Re-fetches the legal-move set and clears the move-made flag.
    pub fn post_event_recompute(&mut self) {
        self.valid_moves = self.engine.valid_moves();
        self.move_made = false;
        debug!(count = self.valid_moves.len(), "legal moves recomputed");
    }

    fn resolve(&mut self, origin: Square, destination: Square) -> InteractionOutcome {
        if self.move_made {
            self.post_event_recompute();
        }

        let candidate = CandidateMove::new(origin, destination, &self.engine.board());
        debug!(%candidate, "candidate move");

        if !self.valid_moves.contains(&candidate) {
            debug!(%candidate, "candidate is not legal, discarded");
            return InteractionOutcome::MoveRejected(candidate);
        }

        if let Err(err) = self.engine.make_move(&candidate) {
            error!(%candidate, %err, "engine refused a move from its own legal set");
            return InteractionOutcome::MoveRejected(candidate);
        }

        self.move_made = true;
        info!(%candidate, "move applied");

        InteractionOutcome::MoveApplied(candidate)
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn is_move_made(&self) -> bool {
        self.move_made
    }

    #[must_use]
    pub fn valid_moves(&self) -> &[CandidateMove] {
        &self.valid_moves
    }

    #[must_use]
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView {
            board: self.engine.board(),
            selected: self.selection.selected_square(),
        }
    }
}
