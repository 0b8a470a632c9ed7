use std::fmt::Display;
use std::fmt::Formatter;

use crate::model::VariableId;

/// The result of invoking a propagator. Propagation either succeeds or empties the domain of a
/// variable, in which case no solution exists under the current domains.
pub(crate) type PropagationStatus = Result<(), EmptyDomain>;

/// The domain of the contained variable became empty during propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain(pub VariableId);

impl Display for EmptyDomain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "the domain of {} is empty", self.0)
    }
}
