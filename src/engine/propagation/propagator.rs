use super::PropagationContextMut;
use crate::basic_types::PropagationStatus;
#[cfg(doc)]
use crate::basic_types::EmptyDomain;
#[cfg(doc)]
use crate::engine::ConstraintSatisfactionSolver;

/// All consistency filters implement the [`Propagator`] trait. A propagator removes words from
/// domains that cannot take part in any solution.
///
/// Propagators run before search starts; the domains are not touched once the
/// [`ConstraintSatisfactionSolver`] begins to branch.
pub(crate) trait Propagator {
    /// Return the name of the propagator, this is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// Remove unsupported words from the domains in the context.
    ///
    /// In case no domain became empty it returns [`Result::Ok`], otherwise it returns the
    /// [`EmptyDomain`] of the first variable that ran out of candidates. The remaining domains are
    /// left in whatever state they reached.
    ///
    /// A propagator must only remove words that do not appear in any solution.
    fn propagate(&self, context: PropagationContextMut) -> PropagationStatus;
}
