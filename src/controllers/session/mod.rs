//! Headless front end: drives the interaction controller from a line-based script.

pub mod errors;
pub mod script;
mod session;

pub use errors::SessionError;
pub use session::{ScriptedSession, SessionSummary};
