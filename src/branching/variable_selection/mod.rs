//! Provides the [`VariableSelector`] trait which is required
//! for variable selectors to implement; the main method in this trait relies on
//! [`VariableSelector::select_variable`].
//!
//! Furthermore, it defines several implementations of the [`VariableSelector`] trait such as
//! [`MinimumRemainingValues`] and [`InputOrder`]. Any [`VariableSelector`] should only select
//! variables which are not assigned yet.

mod input_order;
mod minimum_remaining_values;
mod variable_selector;

pub use input_order::*;
pub use minimum_remaining_values::*;
pub use variable_selector::VariableSelector;
