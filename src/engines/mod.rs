//! Rules engine adapters.

pub mod owlchess;
