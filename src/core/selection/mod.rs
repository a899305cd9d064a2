//! Two-click move selection state machine.

pub mod selection_state;
