pub mod fold;
pub mod input;
pub mod rules;

pub use input::{Inputs, Puzzle};
