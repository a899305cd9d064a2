use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::controllers::interactive::{InputEvent, InteractionController, InteractionOutcome, RulesEnginePort};
use crate::controllers::session::errors::SessionError;
use crate::controllers::session::script::parse_line;
use crate::core::data::board_geometry::BoardGeometry;

/// Tally of what a script run did.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub events: usize,
    pub moves_applied: usize,
    pub moves_rejected: usize,
    pub undos: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: &InteractionOutcome) {
        self.events += 1;
        match outcome {
            InteractionOutcome::MoveApplied(_) => self.moves_applied += 1,
            InteractionOutcome::MoveRejected(_) => self.moves_rejected += 1,
            InteractionOutcome::Undone => self.undos += 1,
            _ => {}
        }
    }
}

pub struct ScriptedSession<E: RulesEnginePort> {
    controller: InteractionController<E>,
    undo_key: char,
}

impl<E: RulesEnginePort> ScriptedSession<E> {
    pub fn new(engine: E, geometry: BoardGeometry, undo_key: char) -> Self {
        Self {
            controller: InteractionController::new(engine, geometry),
            undo_key,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &InteractionController<E> {
        &self.controller
    }

    /// Feeds every script line to the controller until end of input or `quit`.
    ///
    /// Writes the starting board, one outcome line per event, and the board again after every
    /// event that changed it. A malformed line aborts the run.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<SessionSummary, SessionError> {
        let mut summary = SessionSummary::default();
        let undo_key = self.undo_key;

        writeln!(out, "{}", self.controller.engine().board())?;

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let event = match parse_line(&line, index + 1, |key| key.eq_ignore_ascii_case(&undo_key)) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(err) => {
                    warn!(%err, "aborting script");
                    return Err(err.into());
                }
            };

            let outcome = self.controller.process(event);
            summary.record(&outcome);
            writeln!(out, "{}", outcome)?;

            if outcome.mutated_board() {
                writeln!(out, "{}", self.controller.engine().board())?;
            }

            if event == InputEvent::Quit {
                break;
            }
        }

        out.flush()?;
        info!(
            events = summary.events,
            applied = summary.moves_applied,
            rejected = summary.moves_rejected,
            undos = summary.undos,
            "script finished"
        );

        Ok(summary)
    }
}
