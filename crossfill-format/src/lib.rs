//! This crate contains the readers for the two plain-text inputs of a crossword fill: the
//! structure file describing the grid shape, and the vocabulary file listing candidate words.
//!
//! A structure file has one line per row of the grid. An underscore (`_`) marks an open cell, a
//! hash (`#`) marks a blocked cell:
//!
//! ```text
//! #___#
//! #_##_
//! #_##_
//! #_###
//! ```
//!
//! A vocabulary file has one word per line. See [`parse_structure`] and [`parse_vocabulary`].
mod error;
mod structure;
mod vocabulary;

pub use error::*;
pub use structure::*;
pub use vocabulary::*;
