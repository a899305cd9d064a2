//! Interaction controller: turns pointer clicks and key presses into rules engine calls.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: [`InputEvent`] values produced by a windowing backend or a script
//! - **Output**: [`InteractionOutcome`] for the caller, engine calls through [`RulesEnginePort`]
//! - **Core**: the two-click [`SelectionState`](crate::core::selection::selection_state::SelectionState) machine

mod controller;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractionController;
pub use errors::rules_engine::RulesEngineError;
pub use events::input::InputEvent;
pub use events::outcome::InteractionOutcome;
pub use ports::rules_engine::RulesEnginePort;
