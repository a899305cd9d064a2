//! Port definitions for the interactive controller.
//!
//! The controller talks to the rules engine only through [`RulesEnginePort`].

pub mod rules_engine;
