//! Contains structures and traits to define the decision making procedure of the
//! [`crate::Solver`].
//!
//! In general, it provides 2 traits:
//! - The [`VariableSelector`] which selects the next unassigned variable to branch on.
//! - The [`ValueSelector`] which orders the candidate words of the selected variable.
//!
//! A [`Brancher`] combines the two; the [`branchers::IndependentVariableValueBrancher`] does so
//! without any interaction between the selectors. The default brancher picks variables with
//! [`MinimumRemainingValues`] and orders words with [`LeastConstrainingValue`].
pub mod branchers;
mod brancher;
mod selection_context;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use branchers::DefaultBrancher;
pub use branchers::IndependentVariableValueBrancher;
pub use selection_context::SelectionContext;
pub use value_selection::*;
pub use variable_selection::*;
