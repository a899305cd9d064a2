pub mod input;
pub mod outcome;
