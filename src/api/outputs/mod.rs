//! Contains the outputs of the [`crate::Solver`].
mod solution;

pub use solution::Solution;

/// The result of a call to [`crate::Solver::satisfy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// Every slot was filled; the [`Solution`] maps each variable to its word.
    Satisfiable(Solution),
    /// No assignment of distinct words satisfies the crossings.
    Unsatisfiable,
    /// The termination condition stopped the search before a conclusion was reached.
    Unknown,
}
