use thiserror::Error;

/// The reasons a structure or vocabulary file can be rejected. Line and column numbers are
/// 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("the structure does not contain any rows")]
    EmptyStructure,

    #[error("row on line {line} is blank")]
    BlankRow { line: usize },

    #[error("unexpected character {found:?} on line {line}, column {column}; expected '_' or '#'")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("word {word:?} on line {line} contains characters other than ASCII letters")]
    InvalidWord { line: usize, word: String },
}
