//! Provides the [`ValueSelector`] trait which is required
//! for value selectors to implement; the main method in this trait relies on
//! [`ValueSelector::order_values`].
//!
//! Furthermore, it defines several implementations of the [`ValueSelector`] trait such as
//! [`LeastConstrainingValue`] and [`InDomainOrder`]. Any [`ValueSelector`] should only return
//! words which are in the domain of the provided variable.

mod in_domain_order;
mod least_constraining_value;
mod value_selector;

pub use in_domain_order::*;
pub use least_constraining_value::*;
pub use value_selector::ValueSelector;
