//! Contains the consistency filters that prune domains before search.
//!
//! See [`crate::engine::propagation`] for the [`crate::engine::propagation::Propagator`] trait.

pub(crate) mod arc_consistency;
pub(crate) mod node_consistency;

pub use arc_consistency::DirectedArc;
pub(crate) use arc_consistency::ArcConsistency;
pub(crate) use node_consistency::NodeConsistency;
