//! The static description of a crossword fill: the [`Puzzle`] derived from the grid shape and
//! the [`Vocabulary`] of words that may be placed in it.
mod puzzle;
mod variable;
mod vocabulary;

pub use puzzle::*;
pub use variable::*;
pub use vocabulary::*;
