//! Contains the plumbing shared by the consistency filters: the [`Propagator`] trait and the
//! [`PropagationContextMut`] through which propagators read the puzzle and prune domains.
//!
//! The filters themselves live in [`crate::propagators`].
mod propagation_context;
mod propagator;

pub(crate) use propagation_context::*;
pub(crate) use propagator::Propagator;
