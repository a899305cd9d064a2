//! Rules engine backed by the `owlchess` crate.

mod convert;
pub mod engine;

pub use engine::OwlchessEngine;
