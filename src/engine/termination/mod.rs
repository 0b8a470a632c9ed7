//! A [`TerminationCondition`] is a condition which is polled by the solver during the search
//! process. It indicates when the solver should stop, even if no definitive conclusions have been
//! made. The most common example would be [`DecisionBudget`], which terminates the solver after a
//! fixed number of decisions.
mod decision_budget;
mod indefinite;

pub use decision_budget::*;
pub use indefinite::*;

/// The central trait that defines a termination condition. A termination condition determines
/// when the solver should give up searching for solutions.
pub trait TerminationCondition {
    /// Returns `true` when the solver should stop, `false` otherwise. It is called before every
    /// decision.
    fn should_stop(&mut self) -> bool;
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for Box<T> {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }
}
